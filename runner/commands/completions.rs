use std::io::stdout;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::{generate, generate_to, shells};
use log::info;

use crate::cli::{CliArguments, Shell};

/// Write the completion script for `shell` into `output_directory`.
/// Without a directory, the script is printed to stdout.
pub fn create_completion_file(shell: Shell, output_directory: &Option<PathBuf>) -> Result<()> {
    let mut app = CliArguments::command();
    app.set_bin_name("prioq");

    let Some(output_directory) = output_directory else {
        match shell {
            Shell::Bash => generate(shells::Bash, &mut app, "prioq", &mut stdout()),
            Shell::Elvish => generate(shells::Elvish, &mut app, "prioq", &mut stdout()),
            Shell::Fish => generate(shells::Fish, &mut app, "prioq", &mut stdout()),
            Shell::PowerShell => generate(shells::PowerShell, &mut app, "prioq", &mut stdout()),
            Shell::Zsh => generate(shells::Zsh, &mut app, "prioq", &mut stdout()),
        }
        return Ok(());
    };

    let completion_result = match shell {
        Shell::Bash => generate_to(shells::Bash, &mut app, "prioq", output_directory),
        Shell::Elvish => generate_to(shells::Elvish, &mut app, "prioq", output_directory),
        Shell::Fish => generate_to(shells::Fish, &mut app, "prioq", output_directory),
        Shell::PowerShell => generate_to(shells::PowerShell, &mut app, "prioq", output_directory),
        Shell::Zsh => generate_to(shells::Zsh, &mut app, "prioq", output_directory),
    };
    let path = completion_result
        .with_context(|| format!("Failed to generate completions for {shell:?}"))?;
    info!("Completion file created at {path:?}");

    Ok(())
}
