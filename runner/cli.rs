use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

use prioq_lib::admission::{AdmissionRequest, RequestedPriority};

#[derive(Subcommand, Debug, Clone)]
pub enum SubCommand {
    /// Execute tasks by priority.
    ///
    /// Tasks are read from the given files first and from `--task` afterwards.
    /// Tasks with a higher priority are executed first, tasks with the same priority in the
    /// order they've been given.
    /// Invalid tasks, such as tasks with a priority outside of 1-10, are skipped.
    ///
    /// Commands are executed via your system shell, which means that they need proper shell
    /// escaping, for example:
    ///
    /// prioq run -t '5:ls $HOME && echo "Some string"'
    Run {
        /// YAML or JSON files with a list of tasks.
        ///
        /// Each entry needs a `command` and a `priority` field.
        #[arg(value_hint = ValueHint::FilePath)]
        files: Vec<PathBuf>,

        /// Add a task in the form of `PRIORITY:COMMAND`, e.g. `10:echo urgent`.
        #[arg(short, long = "task", value_parser = parse_inline_task)]
        tasks: Vec<AdmissionRequest>,

        /// Clear the queue once all tasks have been processed.
        ///
        /// This overwrites the `auto_clear` value from your config file.
        #[arg(short, long)]
        auto_clear: bool,

        /// Print the tasks as json to stdout instead of a table.
        #[arg(short, long)]
        json: bool,
    },

    /// Generates shell completion files.
    ///
    /// This can be ignored during normal operations.
    Completions {
        /// The target shell.
        #[arg(value_enum)]
        shell: Shell,
        /// The output directory to which the file should be written.
        /// Without it, the completion script is printed to stdout.
        #[arg(value_hint = ValueHint::DirPath)]
        output_directory: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    Auto,
    Never,
    Always,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    PowerShell,
    Zsh,
}

#[derive(Parser, Debug)]
#[command(
    name = "prioq",
    about = "Run shell commands in order of their priority",
    author,
    version
)]
pub struct CliArguments {
    /// Verbose mode (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Colorize the output; auto enables color output when connected to a tty.
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// If provided, prioq only uses this config file.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// The name of the profile that should be loaded from your config file.
    #[arg(short, long)]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub cmd: SubCommand,
}

/// Parse a `PRIORITY:COMMAND` pair.
///
/// The priority itself isn't checked here, that's up to the queue.
/// Only a missing separator or an empty priority are usage errors.
fn parse_inline_task(src: &str) -> Result<AdmissionRequest, String> {
    let (priority, command) = src
        .split_once(':')
        .ok_or_else(|| format!("Expected PRIORITY:COMMAND, got '{src}'"))?;

    let priority = priority.trim();
    if priority.is_empty() {
        return Err(format!("Missing priority in '{src}'"));
    }

    let priority = match priority.parse::<i64>() {
        Ok(priority) => RequestedPriority::Integer(priority),
        Err(_) => RequestedPriority::Malformed(priority.to_string()),
    };

    Ok(AdmissionRequest {
        command: Some(command.trim().to_string()),
        priority: Some(priority),
    })
}
