use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Couldn't find or open file: {}", .0)]
    FileNotFound(String),

    #[error("Error while reading configuration:\n{}", .0)]
    ConfigDeserialization(String),

    /// The content of a task file couldn't be interpreted as a list of tasks.
    #[error("Couldn't read tasks from {:?}:\n{}", .0, .1)]
    TaskFileDeserialization(PathBuf, String),

    /// The configured shell command has no program to run.
    #[error("The configured shell command is empty")]
    EmptyShellCommand,

    #[error("I/O error while {}:\n{}", .0, .1)]
    IoError(String, std::io::Error),

    #[error("I/O error at path {:?} while {}:\n{}", .0, .1, .2)]
    IoPathError(PathBuf, &'static str, std::io::Error),
}
