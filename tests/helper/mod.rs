use std::fs::write;
use std::path::PathBuf;
use std::process::{Command, Output};

use anyhow::{Context, Result};
use assert_cmd::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// A scratch directory with an empty config file, so the user's config never leaks into tests.
pub struct Fixture {
    pub tempdir: TempDir,
    pub config_path: PathBuf,
}

impl Fixture {
    pub fn new() -> Result<Self> {
        Self::with_config("{}\n")
    }

    pub fn with_config(config: &str) -> Result<Self> {
        let tempdir = TempDir::new()?;
        let config_path = tempdir.path().join("prioq.yml");
        write(&config_path, config)?;

        Ok(Fixture {
            tempdir,
            config_path,
        })
    }

    /// Write a file into the scratch directory and return its path.
    pub fn file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.tempdir.path().join(name);
        write(&path, content)?;

        Ok(path)
    }

    /// Run `prioq` with the fixture's config file.
    pub fn run_prioq(&self, args: &[&str]) -> Result<Output> {
        let mut command = Command::cargo_bin("prioq")?;
        command
            .arg("--color")
            .arg("never")
            .arg("--config")
            .arg(&self.config_path)
            .args(args)
            .current_dir(self.tempdir.path());

        command.output().context("Failed to execute prioq")
    }

    /// Run `prioq run --json` with the given arguments and parse the printed tasks.
    pub fn run_json(&self, args: &[&str]) -> Result<(Output, Vec<Value>)> {
        let mut full_args = vec!["run", "--json"];
        full_args.extend_from_slice(args);
        let output = self.run_prioq(&full_args)?;

        let tasks: Vec<Value> = serde_json::from_slice(&output.stdout).with_context(|| {
            format!(
                "Couldn't parse output as json:\n{}",
                String::from_utf8_lossy(&output.stdout)
            )
        })?;

        Ok((output, tasks))
    }
}

/// Extract a string field of every task.
pub fn field(tasks: &[Value], name: &str) -> Vec<String> {
    tasks
        .iter()
        .map(|task| task[name].as_str().unwrap_or_default().to_string())
        .collect()
}
