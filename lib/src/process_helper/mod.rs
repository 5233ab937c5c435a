//! Subprocess handling.
//!
//! The queue never spawns processes by itself. It hands every command to an [Executor],
//! which allows to swap the real shell for a test double.
//!
//! Which shell is used by default is platform specific.
//! Depending on the target, the respective platform is read and loaded into this scope.
use std::process::{Command, Stdio};

use log::debug;

use crate::error::Error;

// Unix specific process handling
#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use self::unix::*;

// Windows specific process handling
#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
pub use self::windows::*;

/// Everything an [Executor] captured while running a single command.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct CommandOutput {
    /// Whether the command exited with status 0.
    pub success: bool,
    /// The exit code, if the process exited normally.
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Runs a command to completion.
///
/// Implementations block until the command finished.
/// An `Err` is returned if the command couldn't be run at all, while a command that ran but
/// failed is reported via [CommandOutput::success].
pub trait Executor {
    fn execute(&self, command: &str) -> Result<CommandOutput, Error>;
}

/// The default [Executor], which runs commands through the system's shell.
#[derive(Clone, Debug)]
pub struct ShellExecutor {
    shell_command: Vec<String>,
}

impl Default for ShellExecutor {
    fn default() -> Self {
        ShellExecutor {
            shell_command: default_shell_command(),
        }
    }
}

impl ShellExecutor {
    /// Create an executor with a custom shell, for instance `["bash", "-c"]`.
    /// The task's command is always passed as the last argument.
    pub fn new(shell_command: Vec<String>) -> Self {
        ShellExecutor { shell_command }
    }
}

impl Executor for ShellExecutor {
    fn execute(&self, command: &str) -> Result<CommandOutput, Error> {
        let mut process = compile_shell_command(&self.shell_command, command)?;
        debug!("Spawning {process:?}");

        let output = process
            .stdin(Stdio::null())
            .output()
            .map_err(|err| Error::IoError(format!("spawning command '{command}'"), err))?;

        Ok(CommandOutput {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// Build the process for a command string.
/// The first entry of `shell_command` is the program, all others are leading arguments.
pub fn compile_shell_command(
    shell_command: &[String],
    command_string: &str,
) -> Result<Command, Error> {
    let (program, args) = shell_command
        .split_first()
        .ok_or(Error::EmptyShellCommand)?;

    let mut command = Command::new(program);
    command.args(args).arg(command_string);

    Ok(command)
}
