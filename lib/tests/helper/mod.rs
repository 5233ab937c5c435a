use std::fs::write;
use std::path::PathBuf;

use tempdir::TempDir;

use prioq_lib::process_helper::ShellExecutor;
use prioq_lib::queue::TaskQueue;
use prioq_lib::settings::Settings;

/// Create a queue that runs its tasks through the configured shell.
pub fn shell_queue(settings: &Settings) -> TaskQueue {
    TaskQueue::with_executor(ShellExecutor::new(settings.runner.shell_command()))
}

/// Write a task file into a fresh temporary directory.
///
/// The directory must be kept alive for as long as the file is needed.
pub fn task_file(name: &str, content: &str) -> (PathBuf, TempDir) {
    let tempdir = TempDir::new("prioq_lib").unwrap();
    let path = tempdir.path().join(name);
    write(&path, content).unwrap();

    (path, tempdir)
}
