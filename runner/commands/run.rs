use std::path::PathBuf;

use anyhow::{Context, Result};
use log::warn;

use prioq_lib::admission::{Admission, AdmissionRequest};
use prioq_lib::process_helper::{Executor, ShellExecutor};
use prioq_lib::queue::TaskQueue;
use prioq_lib::settings::Settings;
use prioq_lib::task::Task;
use prioq_lib::task_file::read_task_file;

use crate::display::{print_tasks, print_tasks_json, OutputStyle};

/// Admit all tasks from the given files and the commandline, run them and print the result.
///
/// Returns whether all tasks succeeded.
pub fn run_tasks(
    settings: &Settings,
    style: &OutputStyle,
    files: &[PathBuf],
    tasks: Vec<AdmissionRequest>,
    auto_clear: bool,
    json: bool,
) -> Result<bool> {
    let mut queue =
        TaskQueue::with_executor(ShellExecutor::new(settings.runner.shell_command()));

    for path in files {
        let requests = read_task_file(path)
            .with_context(|| format!("Failed to read tasks from {path:?}"))?;
        admit(&mut queue, requests, &path.to_string_lossy());
    }
    admit(&mut queue, tasks, "--task");

    let summary = queue.run(false);

    // Grab the results before the queue is possibly cleared.
    let processed: Vec<Task> = queue.tasks().cloned().collect();
    if auto_clear || settings.runner.auto_clear {
        queue.clear_queue();
    }

    if json {
        print_tasks_json(&processed)?;
    } else {
        print_tasks(&processed, &summary, settings, style);
    }

    Ok(summary.all_succeeded())
}

/// Add requests to the queue and warn about every request that's been rejected.
fn admit<E: Executor>(
    queue: &mut TaskQueue<E>,
    requests: Vec<AdmissionRequest>,
    source: &str,
) {
    for (index, admission) in queue.add_tasks(requests).into_iter().enumerate() {
        let reason = match admission {
            Admission::Accepted(_) => continue,
            Admission::RejectedInvalidPriority(priority) => {
                format!("priority {priority} isn't an integer between 1 and 10")
            }
            Admission::RejectedMissingField(field) => format!("'{field}' is missing"),
        };
        warn!("Skipping task #{index} from {source}: {reason}");
    }
}
