use std::time::Duration;

use chrono::prelude::*;
use serde::Serializer;
use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The lowest priority a task may have.
pub const MIN_PRIORITY: u8 = 1;
/// The highest priority a task may have.
pub const MAX_PRIORITY: u8 = 10;

/// The life-cycle of a task.
///
/// Every task starts as `Waiting` and moves exactly once into one of the two terminal states,
/// as soon as it has been executed.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskState {
    /// The task has been admitted and waits for the next run.
    Waiting,
    /// The command exited with status 0.
    Success,
    /// The command exited with a non-zero status or couldn't be executed at all.
    Error,
}

/// Representation of a single admitted command.
///
/// `output`, `error_log`, `duration` and `started_at` won't be set until the task has been
/// executed.
#[derive(PartialEq, Eq, Clone, Serialize)]
pub struct Task {
    /// The admission sequence number. Lower ids have been admitted earlier.
    pub id: usize,
    pub command: String,
    priority: u8,
    pub state: TaskState,
    /// Captured stdout of the command.
    pub output: Option<Vec<u8>>,
    /// Captured stderr of a failed command, or the reason why it couldn't be spawned.
    pub error_log: Option<Vec<u8>>,
    #[serde(serialize_with = "serialize_duration_secs")]
    pub duration: Option<Duration>,
    pub started_at: Option<DateTime<Local>>,
}

impl Task {
    pub(crate) fn new(id: usize, command: String, priority: u8) -> Task {
        Task {
            id,
            command,
            priority,
            state: TaskState::Waiting,
            output: None,
            error_log: None,
            duration: None,
            started_at: None,
        }
    }

    /// The priority can only be read. It's fixed once the task has been admitted.
    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn is_waiting(&self) -> bool {
        self.state == TaskState::Waiting
    }

    /// Whether the task has been executed, no matter the outcome.
    pub fn is_done(&self) -> bool {
        !self.is_waiting()
    }

    pub fn failed(&self) -> bool {
        self.state == TaskState::Error
    }

    /// The execution time in seconds.
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration.map(|duration| duration.as_secs_f64())
    }

    /// Move a waiting task into its terminal state.
    /// Tasks that already finished are left untouched.
    pub(crate) fn finish(
        &mut self,
        state: TaskState,
        output: Vec<u8>,
        error_log: Option<Vec<u8>>,
        started_at: DateTime<Local>,
        duration: Duration,
    ) {
        if !self.is_waiting() || state == TaskState::Waiting {
            return;
        }

        self.state = state;
        self.output = Some(output);
        self.error_log = error_log;
        self.started_at = Some(started_at);
        self.duration = Some(duration);
    }
}

/// Captured output can become quite large, which is why it's left out of the `Debug` output.
impl std::fmt::Debug for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Task")
            .field("id", &self.id)
            .field("command", &self.command)
            .field("priority", &self.priority)
            .field("state", &self.state)
            .field("output", &self.output.as_ref().map(|_| "hidden"))
            .field("error_log", &self.error_log.as_ref().map(|_| "hidden"))
            .field("duration", &self.duration)
            .field("started_at", &self.started_at)
            .finish()
    }
}

fn serialize_duration_secs<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match duration {
        Some(duration) => serializer.serialize_some(&duration.as_secs_f64()),
        None => serializer.serialize_none(),
    }
}
