use anyhow::Result;
use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use prioq_runner_lib::cli::CliArguments;

fn main() -> Result<()> {
    // Parse commandline options.
    let opt = CliArguments::parse();

    // Set the verbosity level of the logger.
    let level = match opt.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    // Logs go to stderr, so `--json` output on stdout stays parsable.
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let all_succeeded = prioq_runner_lib::run(opt)?;
    if !all_succeeded {
        std::process::exit(1);
    }

    Ok(())
}
