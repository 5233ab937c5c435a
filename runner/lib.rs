use anyhow::{Context, Result};

use prioq_lib::settings::Settings;

pub mod cli;
mod commands;
mod display;

use crate::cli::{CliArguments, SubCommand};
use crate::commands::{create_completion_file, run_tasks};
use crate::display::OutputStyle;

/// The main entry point for the runner logic.
/// It's basically the `main`, but publicly exported as a library.
/// That way we can properly do integration testing.
///
/// Returns whether all executed tasks succeeded.
pub fn run(opt: CliArguments) -> Result<bool> {
    if let SubCommand::Completions {
        shell,
        output_directory,
    } = &opt.cmd
    {
        create_completion_file(*shell, output_directory)?;
        return Ok(true);
    }

    // Try to read settings from the configuration file.
    let (mut settings, _config_found) =
        Settings::read(&opt.config).context("Error while reading configuration.")?;

    // Load any requested profile.
    if let Some(profile) = &opt.profile {
        settings.load_profile(profile)?;
    }

    let style = OutputStyle::new(&settings, opt.color);

    match opt.cmd {
        SubCommand::Run {
            files,
            tasks,
            auto_clear,
            json,
        } => run_tasks(&settings, &style, &files, tasks, auto_clear, json),
        SubCommand::Completions { .. } => Ok(true),
    }
}
