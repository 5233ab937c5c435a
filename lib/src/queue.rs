use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use chrono::prelude::*;
use log::{debug, error, info};

use crate::admission::{validate, Admission, AdmissionRequest};
use crate::process_helper::{Executor, ShellExecutor};
use crate::task::{Task, TaskState};

/// A queue that can be shared between threads.
///
/// [TaskQueue::run] needs mutable access for its whole duration, so the lock is held until all
/// tasks have been processed. Tasks admitted by other threads in the meantime have to wait for
/// the lock and will be picked up by the next run.
pub type SharedQueue<E = ShellExecutor> = Arc<Mutex<TaskQueue<E>>>;

/// The position of a task inside the queue.
///
/// Keys are sorted by descending priority first and by ascending admission id second.
/// That way iterating over the queue yields tasks in their execution order.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
struct QueueKey {
    priority: Reverse<u8>,
    id: usize,
}

impl QueueKey {
    fn of(task: &Task) -> Self {
        QueueKey {
            priority: Reverse(task.priority()),
            id: task.id,
        }
    }
}

/// The result of a single [TaskQueue::run].
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct RunSummary {
    /// The amount of tasks that have been executed.
    pub processed: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Wall-clock time of the whole run.
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// A queue of shell commands, which are executed by priority.
///
/// Tasks with a higher priority are executed first.
/// Tasks with the same priority are executed in the order they've been admitted.
///
/// Executed tasks stay in the queue with their final state, until the queue is cleared.
/// A subsequent [run](TaskQueue::run) only executes tasks that are still waiting.
pub struct TaskQueue<E: Executor = ShellExecutor> {
    tasks: BTreeMap<QueueKey, Task>,
    /// The id of the next admitted task.
    next_id: usize,
    executor: E,
}

impl TaskQueue<ShellExecutor> {
    /// Create an empty queue, that runs its tasks via the system's shell.
    pub fn new() -> Self {
        Self::with_executor(ShellExecutor::default())
    }

    /// Create a queue and admit all given requests.
    /// Invalid requests are skipped.
    pub fn with_tasks<I>(requests: I) -> Self
    where
        I: IntoIterator<Item = AdmissionRequest>,
    {
        let mut queue = Self::new();
        queue.add_tasks(requests);
        queue
    }
}

impl Default for TaskQueue<ShellExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Executor> TaskQueue<E> {
    pub fn with_executor(executor: E) -> Self {
        TaskQueue {
            tasks: BTreeMap::new(),
            next_id: 0,
            executor,
        }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Validate a request and add it to the queue.
    ///
    /// Rejected requests are logged and leave the queue untouched.
    pub fn add_task(&mut self, request: AdmissionRequest) -> Admission {
        let valid = match validate(request) {
            Ok(valid) => valid,
            Err(rejection) => {
                match &rejection {
                    Admission::RejectedInvalidPriority(priority) => {
                        error!("Task priority must be between 1 and 10: {priority}")
                    }
                    Admission::RejectedMissingField(field) => {
                        error!("Task needs the fields 'command' and 'priority'. Missing: '{field}'")
                    }
                    Admission::Accepted(_) => {}
                }
                return rejection;
            }
        };

        let id = self.next_id;
        self.next_id += 1;

        let task = Task::new(id, valid.command, valid.priority);
        debug!(
            "Add task priority: {}, command: {}",
            task.priority(),
            task.command
        );
        self.tasks.insert(QueueKey::of(&task), task);

        Admission::Accepted(id)
    }

    /// Shortcut for [TaskQueue::add_task].
    pub fn add(&mut self, command: impl Into<String>, priority: i64) -> Admission {
        self.add_task(AdmissionRequest::new(command, priority))
    }

    /// Admit several requests in the given order.
    pub fn add_tasks<I>(&mut self, requests: I) -> Vec<Admission>
    where
        I: IntoIterator<Item = AdmissionRequest>,
    {
        requests
            .into_iter()
            .map(|request| self.add_task(request))
            .collect()
    }

    /// Execute all waiting tasks, starting with the highest priority.
    ///
    /// The order is fixed when the run starts.
    /// A failing task is marked as [TaskState::Error] and the run continues with the next task.
    /// If `auto_clear` is set, the queue is emptied once all tasks have been processed.
    pub fn run(&mut self, auto_clear: bool) -> RunSummary {
        info!("Starting task processing:");
        let start = Instant::now();

        let waiting: Vec<QueueKey> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.is_waiting())
            .map(|(key, _)| *key)
            .collect();

        let mut summary = RunSummary::default();
        for key in waiting {
            let Some(task) = self.tasks.get_mut(&key) else {
                continue;
            };

            if execute_task(&self.executor, task) {
                summary.succeeded += 1;
            } else {
                summary.failed += 1;
            }
            summary.processed += 1;
        }

        summary.elapsed = start.elapsed();
        info!(
            "{} task(s) processed in {:.2} sec",
            summary.processed,
            summary.elapsed.as_secs_f64()
        );

        if auto_clear {
            self.clear_queue();
        }

        summary
    }

    /// Remove all tasks, no matter their state.
    pub fn clear_queue(&mut self) {
        debug!("Clear queue");
        self.tasks.clear();
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All tasks in their execution order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    pub fn get(&self, id: usize) -> Option<&Task> {
        self.tasks.values().find(|task| task.id == id)
    }
}

/// Run a single task and record the outcome on it.
///
/// Returns whether the task succeeded.
fn execute_task<E: Executor>(executor: &E, task: &mut Task) -> bool {
    let started_at = Local::now();
    let start = Instant::now();
    let result = executor.execute(&task.command);
    let duration = start.elapsed();

    let (state, output, error_log) = match result {
        Ok(output) if output.success => (TaskState::Success, output.stdout, None),
        Ok(output) => (TaskState::Error, output.stdout, Some(output.stderr)),
        Err(error) => (
            TaskState::Error,
            Vec::new(),
            Some(error.to_string().into_bytes()),
        ),
    };

    debug!(
        "Task priority: {}, command: {}: {state}, executed in {:.2} sec",
        task.priority(),
        task.command,
        duration.as_secs_f64()
    );
    if let Some(error_log) = &error_log {
        debug!("\tLog error: {}", String::from_utf8_lossy(error_log));
    }

    task.finish(state, output, error_log, started_at, duration);

    state == TaskState::Success
}
