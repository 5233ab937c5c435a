use comfy_table::presets::UTF8_HORIZONTAL_ONLY;
use comfy_table::*;

use prioq_lib::settings::Settings;
use prioq_lib::task::{Task, TaskState};

use super::OutputStyle;

/// This builder is responsible for determining which table columns should be displayed and
/// building a full [comfy_table] from a list of given [Task]s.
#[derive(Debug, Clone)]
pub struct TableBuilder<'a> {
    settings: &'a Settings,
    style: &'a OutputStyle,

    /// The error column is only shown if there's at least one task with an error log.
    error: bool,
}

impl<'a> TableBuilder<'a> {
    pub fn new(settings: &'a Settings, style: &'a OutputStyle) -> Self {
        Self {
            settings,
            style,
            error: false,
        }
    }

    pub fn build(mut self, tasks: &[Task]) -> Table {
        self.error = tasks.iter().any(|task| first_error_line(task).is_some());

        let mut table = Table::new();
        table
            .set_content_arrangement(ContentArrangement::Dynamic)
            .load_preset(UTF8_HORIZONTAL_ONLY)
            .set_header(self.build_header())
            .add_rows(self.build_task_rows(tasks));

        self.style.apply(&mut table);

        table
    }

    fn build_header(&self) -> Row {
        let mut header = vec![
            Cell::new("Id"),
            Cell::new("Priority"),
            Cell::new("State"),
            Cell::new("Command"),
            Cell::new("Start"),
            Cell::new("Duration"),
        ];
        if self.error {
            header.push(Cell::new("Error"));
        }

        Row::from(header)
    }

    fn build_task_rows(&self, tasks: &[Task]) -> Vec<Row> {
        let mut rows = Vec::new();
        for task in tasks.iter() {
            let mut row = Row::new();
            row.add_cell(Cell::new(task.id));
            row.add_cell(Cell::new(task.priority()));

            let color = match task.state {
                TaskState::Waiting => Color::Yellow,
                TaskState::Success => Color::Green,
                TaskState::Error => Color::Red,
            };
            row.add_cell(
                self.style
                    .styled_cell(task.state, Some(color), Some(Attribute::Bold)),
            );

            row.add_cell(Cell::new(&task.command));

            let start = task
                .started_at
                .map(|start| {
                    start
                        .format(&self.settings.client.status_time_format)
                        .to_string()
                })
                .unwrap_or_default();
            row.add_cell(Cell::new(start));

            let duration = task
                .duration_secs()
                .map(|secs| format!("{secs:.2}s"))
                .unwrap_or_default();
            row.add_cell(Cell::new(duration));

            if self.error {
                row.add_cell(Cell::new(first_error_line(task).unwrap_or_default()));
            }

            rows.push(row);
        }

        rows
    }
}

/// The first non-empty line of a task's error log.
fn first_error_line(task: &Task) -> Option<String> {
    let error_log = task.error_log.as_ref()?;
    String::from_utf8_lossy(error_log)
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(ToString::to_string)
}
