use std::time::Duration;

use anyhow::{Context, Result};

use prioq_lib::queue::RunSummary;
use prioq_lib::settings::Settings;
use prioq_lib::task::Task;

mod style;
mod table_builder;

pub use self::style::OutputStyle;
use self::table_builder::TableBuilder;

/// Print all tasks as a table, followed by a short summary of the run.
pub fn print_tasks(
    tasks: &[Task],
    summary: &RunSummary,
    settings: &Settings,
    style: &OutputStyle,
) {
    if tasks.is_empty() {
        println!("No tasks have been processed.");
        return;
    }

    let table = TableBuilder::new(settings, style).build(tasks);
    println!("{table}");
    println!("{}", summary_line(summary));
}

/// Print all tasks as json to stdout.
pub fn print_tasks_json(tasks: &[Task]) -> Result<()> {
    let json = serde_json::to_string_pretty(tasks).context("Failed to serialize tasks")?;
    println!("{json}");

    Ok(())
}

fn summary_line(summary: &RunSummary) -> String {
    let mut line = format!(
        "{} task(s) processed in {}",
        summary.processed,
        format_duration(summary.elapsed)
    );
    if summary.failed > 0 {
        line.push_str(&format!(", {} failed", summary.failed));
    }

    line
}

fn format_duration(duration: Duration) -> String {
    format!("{:.2} sec", duration.as_secs_f64())
}
