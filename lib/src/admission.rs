use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_derive::{Deserialize, Serialize};

use crate::task::{MAX_PRIORITY, MIN_PRIORITY};

/// A request to admit a task into a [TaskQueue](crate::queue::TaskQueue).
///
/// Both fields are optional, since requests usually come from files or user input.
/// Missing fields are caught during admission and lead to a rejection.
#[derive(PartialEq, Eq, Clone, Debug, Default, Deserialize, Serialize)]
pub struct AdmissionRequest {
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub priority: Option<RequestedPriority>,
}

impl AdmissionRequest {
    pub fn new(command: impl Into<String>, priority: i64) -> Self {
        AdmissionRequest {
            command: Some(command.into()),
            priority: Some(RequestedPriority::Integer(priority)),
        }
    }
}

/// The priority of a request, as it has been submitted.
///
/// Anything that isn't an `i64` (floats, strings, huge integers, ...) is kept in textual form.
/// Such values are rejected during admission, instead of failing to read a whole task file.
#[derive(PartialEq, Eq, Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum RequestedPriority {
    Integer(i64),
    Malformed(String),
}

impl From<i64> for RequestedPriority {
    fn from(priority: i64) -> Self {
        RequestedPriority::Integer(priority)
    }
}

impl fmt::Display for RequestedPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestedPriority::Integer(priority) => write!(f, "{priority}"),
            RequestedPriority::Malformed(text) => write!(f, "'{text}'"),
        }
    }
}

impl<'de> de::Deserialize<'de> for RequestedPriority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PriorityVisitor)
    }
}

/// Accepts any value and never fails, so the surrounding list can still be read.
struct PriorityVisitor;

impl PriorityVisitor {
    fn integer<T>(value: T) -> RequestedPriority
    where
        T: TryInto<i64> + ToString + Copy,
    {
        match value.try_into() {
            Ok(priority) => RequestedPriority::Integer(priority),
            Err(_) => RequestedPriority::Malformed(value.to_string()),
        }
    }
}

impl<'de> Visitor<'de> for PriorityVisitor {
    type Value = RequestedPriority;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a task priority")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(RequestedPriority::Integer(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Self::integer(value))
    }

    fn visit_i128<E: de::Error>(self, value: i128) -> Result<Self::Value, E> {
        Ok(Self::integer(value))
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<Self::Value, E> {
        Ok(Self::integer(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(RequestedPriority::Malformed(value.to_string()))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(RequestedPriority::Malformed(value.to_string()))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(RequestedPriority::Malformed(value.to_string()))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(RequestedPriority::Malformed("[...]".into()))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(RequestedPriority::Malformed("{...}".into()))
    }
}

/// One of the two fields an [AdmissionRequest] must carry.
#[derive(PartialEq, Eq, Clone, Copy, Debug, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum RequiredField {
    Command,
    Priority,
}

/// The outcome of an admission.
///
/// A rejection never touches the queue.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Admission {
    /// The task has been added with this id.
    Accepted(usize),
    /// The priority isn't an integer within `1..=10`.
    RejectedInvalidPriority(RequestedPriority),
    /// A required field is missing or the command is blank.
    RejectedMissingField(RequiredField),
}

impl Admission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Admission::Accepted(_))
    }
}

/// A request that passed validation.
#[derive(Debug)]
pub(crate) struct ValidRequest {
    pub command: String,
    pub priority: u8,
}

/// Check a request without touching any queue.
///
/// On success the validated command and priority are returned.
/// Otherwise the rejection that should be reported to the caller.
pub(crate) fn validate(request: AdmissionRequest) -> Result<ValidRequest, Admission> {
    let command = match request.command {
        Some(command) if !command.trim().is_empty() => command,
        _ => return Err(Admission::RejectedMissingField(RequiredField::Command)),
    };
    let range = i64::from(MIN_PRIORITY)..=i64::from(MAX_PRIORITY);
    let priority = match request.priority {
        None => return Err(Admission::RejectedMissingField(RequiredField::Priority)),
        // Safe, since we just checked the range.
        Some(RequestedPriority::Integer(priority)) if range.contains(&priority) => priority as u8,
        Some(priority) => return Err(Admission::RejectedInvalidPriority(priority)),
    };

    Ok(ValidRequest { command, priority })
}
