use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;

use crate::admission::AdmissionRequest;
use crate::error::Error;
use crate::settings::expand_home;

/// Read a list of admission requests from a file.
///
/// Files ending with `.json` are parsed as JSON, everything else as YAML.
/// Entries don't need to be complete, missing fields are caught during admission.
///
/// ```yaml
/// - command: "echo 'Up, Up, Down, Down'"
///   priority: 1
/// - command: "ls -al"
///   priority: 10
/// ```
pub fn read_task_file(path: &Path) -> Result<Vec<AdmissionRequest>, Error> {
    let path = expand_home(path);
    if !path.is_file() {
        return Err(Error::FileNotFound(format!(
            "Couldn't find task file at path {path:?}"
        )));
    }

    info!("Reading tasks from {path:?}");
    let file =
        File::open(&path).map_err(|err| Error::IoPathError(path.clone(), "opening", err))?;
    let reader = BufReader::new(file);

    let is_json = path
        .extension()
        .map(|extension| extension.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let requests = if is_json {
        serde_json::from_reader(reader).map_err(|err| err.to_string())
    } else {
        serde_yaml::from_reader(reader).map_err(|err| err.to_string())
    };

    requests.map_err(|message| Error::TaskFileDeserialization(path, message))
}
