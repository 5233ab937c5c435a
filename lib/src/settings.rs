use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::info;
use serde_derive::{Deserialize, Serialize};
use shellexpand::tilde;

use crate::error::Error;
use crate::platform::directories::*;
use crate::process_helper::default_shell_command;
use crate::setting_defaults::*;

/// All settings which are used when running the queue.
#[derive(PartialEq, Eq, Clone, Debug, Default, Deserialize, Serialize)]
pub struct Runner {
    /// Don't access this property directly, but rather use the getter with the same name.
    ///
    /// The program and leading arguments used to run a task, e.g. `["bash", "-c"]`.
    /// The task's command is appended as last argument.
    pub shell_command: Option<Vec<String>>,
    /// Whether the queue should be emptied once all tasks have been processed.
    #[serde(default = "Default::default")]
    pub auto_clear: bool,
}

/// All settings which are used to display results.
#[derive(PartialEq, Eq, Clone, Debug, Deserialize, Serialize)]
pub struct Client {
    /// Whether the client should use dark shades instead of regular colors.
    #[serde(default = "Default::default")]
    pub dark_mode: bool,
    /// The format that will be used to display the start time of tasks.
    #[serde(default = "default_status_time_format")]
    pub status_time_format: String,
}

impl Default for Client {
    fn default() -> Self {
        Client {
            dark_mode: false,
            status_time_format: default_status_time_format(),
        }
    }
}

/// The parent settings struct. \
/// This contains all other setting structs.
#[derive(PartialEq, Eq, Clone, Debug, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default = "Default::default")]
    pub runner: Runner,
    #[serde(default = "Default::default")]
    pub client: Client,
    #[serde(default = "HashMap::new")]
    pub profiles: HashMap<String, NestedSettings>,
}

/// The nested settings struct for profiles. \
/// In contrast to the normal `Settings` struct, this struct doesn't allow profiles.
/// That way we prevent nested profiles and problems with self-referencing structs.
#[derive(PartialEq, Eq, Clone, Debug, Deserialize, Serialize)]
pub struct NestedSettings {
    #[serde(default = "Default::default")]
    pub runner: Runner,
    #[serde(default = "Default::default")]
    pub client: Client,
}

/// Little helper which expands a given path's `~` characters to a fully qualified path.
pub fn expand_home(old_path: &Path) -> PathBuf {
    PathBuf::from(tilde(&old_path.to_string_lossy()).into_owned())
}

impl Runner {
    pub fn shell_command(&self) -> Vec<String> {
        match &self.shell_command {
            Some(shell_command) => shell_command.clone(),
            None => default_shell_command(),
        }
    }
}

impl Settings {
    /// Try to read existing config files, while using default values for non-existing fields.
    /// If successful, this will return a full config as well as a boolean on whether we found an
    /// existing configuration file or not.
    ///
    /// The default local config locations depends on the current target.
    pub fn read(from_file: &Option<PathBuf>) -> Result<(Settings, bool), Error> {
        // Load the config from a very specific file path
        if let Some(path) = from_file {
            let path = expand_home(path);
            if !path.exists() || !path.is_file() {
                return Err(Error::FileNotFound(format!(
                    "Couldn't find config at path {path:?}"
                )));
            }

            return Ok((Self::read_file(&path)?, true));
        };

        info!("Parsing config files");
        for directory in get_config_directories().into_iter() {
            let path = directory.join("prioq.yml");
            info!("Checking path: {path:?}");

            // Check if the file exists and parse it.
            if path.exists() && path.is_file() {
                info!("Found config file at: {path:?}");
                return Ok((Self::read_file(&path)?, true));
            }
        }

        info!("No config file found. Use default config.");
        // Return a default configuration if we couldn't find a file.
        Ok((Settings::default(), false))
    }

    fn read_file(path: &Path) -> Result<Settings, Error> {
        // Open the file in read-only mode with buffer.
        let file = File::open(path)
            .map_err(|err| Error::IoPathError(path.to_path_buf(), "opening config", err))?;
        let reader = BufReader::new(file);

        serde_yaml::from_reader(reader)
            .map_err(|err| Error::ConfigDeserialization(err.to_string()))
    }

    /// Try to load a profile. Error if it doesn't exist.
    pub fn load_profile(&mut self, profile: &str) -> Result<(), Error> {
        let profile = self.profiles.remove(profile).ok_or_else(|| {
            Error::ConfigDeserialization(format!("Couldn't find profile with name \"{profile}\""))
        })?;

        self.runner = profile.runner;
        self.client = profile.client;

        Ok(())
    }
}
