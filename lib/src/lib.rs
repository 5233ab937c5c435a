//! Prioq-lib contains everything needed to run shell commands in order of their priority.
//!
//! It contains:
//!
//! - The [TaskQueue](queue::TaskQueue), which admits, orders and executes tasks.
//! - Everything about the [Task](task::Task) and its [TaskState](task::TaskState).
//! - The [Executor](process_helper::Executor) abstraction, which actually runs commands.
//! - Settings and task file handling used by the `prioq` binary.
//!
//! ```no_run
//! use prioq_lib::queue::TaskQueue;
//!
//! let mut queue = TaskQueue::new();
//! queue.add("echo 'world'", 1);
//! queue.add("echo 'hello'", 10);
//!
//! let summary = queue.run(false);
//! assert!(summary.all_succeeded());
//! ```

/// Validation of incoming task requests.
pub mod admission;
/// Prioq lib's own Error implementation.
pub mod error;
/// Platform specific code, mainly used to get platform specific config directories.
mod platform;
/// Running commands through the system's shell.
pub mod process_helper;
/// The priority queue and its execution loop.
pub mod queue;
/// This module contains all platform unspecific default values for our settings.
mod setting_defaults;
/// Prioq's representation of configuration and their default settings.
pub mod settings;
/// Everything regarding a single task.
pub mod task;
/// Reading task lists from YAML or JSON files.
pub mod task_file;
