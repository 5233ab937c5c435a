mod completions;
mod run;

pub use self::completions::create_completion_file;
pub use self::run::run_tasks;
