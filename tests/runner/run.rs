use anyhow::Result;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::helper::*;

#[test]
/// Tasks are executed by priority and a failing task doesn't stop the others.
fn test_run_mixed_outcomes() -> Result<()> {
    let fixture = Fixture::new()?;

    let (output, tasks) =
        fixture.run_json(&["-t", "5:echo A", "-t", "1:echo B", "-t", "10:false"])?;

    assert_eq!(field(&tasks, "command"), vec!["false", "echo A", "echo B"]);
    assert_eq!(field(&tasks, "state"), vec!["ERROR", "SUCCESS", "SUCCESS"]);
    // A failed task results in a failing exit code.
    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

#[test]
fn test_same_priority_keeps_order() -> Result<()> {
    let fixture = Fixture::new()?;

    let (output, tasks) =
        fixture.run_json(&["-t", "7:echo first", "-t", "7:echo second", "-t", "7:echo third"])?;

    assert!(output.status.success());
    assert_eq!(
        field(&tasks, "command"),
        vec!["echo first", "echo second", "echo third"]
    );

    Ok(())
}

#[test]
/// Output and error log are part of the json output as raw bytes.
fn test_captured_output() -> Result<()> {
    let fixture = Fixture::new()?;

    let (_, tasks) = fixture.run_json(&["-t", "3:echo out; echo err >&2; exit 1"])?;

    let task = &tasks[0];
    assert_eq!(task["output"], serde_json::json!(b"out\n".to_vec()));
    assert_eq!(task["error_log"], serde_json::json!(b"err\n".to_vec()));
    assert!(task["duration"].as_f64().is_some());

    Ok(())
}

#[rstest]
#[case("0:echo zero")]
#[case("11:echo eleven")]
#[case("-3:echo negative")]
#[case("99999999999999999999:echo huge")]
#[case("high:echo word")]
/// Tasks with a priority outside of 1-10 are skipped with a warning.
fn test_invalid_priority_is_skipped(#[case] task: &str) -> Result<()> {
    let fixture = Fixture::new()?;

    // Use the `--task=` form, so negative priorities aren't mistaken for flags.
    let task = format!("--task={task}");
    let (output, tasks) = fixture.run_json(&["-t", "4:echo valid", task.as_str()])?;

    assert!(output.status.success());
    assert_eq!(field(&tasks, "command"), vec!["echo valid"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("isn't an integer between 1 and 10"),
        "Missing warning in stderr: {stderr}"
    );

    Ok(())
}

#[test]
/// Tasks from files come first, followed by tasks from the commandline.
fn test_run_task_files() -> Result<()> {
    let fixture = Fixture::new()?;
    let yaml = fixture.file(
        "tasks.yml",
        "- command: echo yaml\n  priority: 2\n- priority: 9\n",
    )?;
    let json = fixture.file(
        "tasks.json",
        r#"[{"command": "echo json", "priority": 2}, {"command": "echo high", "priority": 9}]"#,
    )?;

    let yaml = yaml.to_str().unwrap();
    let json = json.to_str().unwrap();
    let (output, tasks) = fixture.run_json(&[yaml, json, "-t", "2:echo inline"])?;

    assert!(output.status.success());
    assert_eq!(
        field(&tasks, "command"),
        vec!["echo high", "echo yaml", "echo json", "echo inline"]
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'command' is missing"), "{stderr}");

    Ok(())
}

#[test]
/// An unusable priority in a task file only skips that entry.
fn test_task_file_with_malformed_priorities() -> Result<()> {
    let fixture = Fixture::new()?;
    let yaml = fixture.file(
        "tasks.yml",
        concat!(
            "- command: echo ok\n  priority: 5\n",
            "- command: echo huge\n  priority: 99999999999999999999\n",
            "- command: echo float\n  priority: 5.5\n",
        ),
    )?;

    let (output, tasks) = fixture.run_json(&[yaml.to_str().unwrap()])?;

    assert!(output.status.success());
    assert_eq!(field(&tasks, "command"), vec!["echo ok"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("priority '99999999999999999999'"), "{stderr}");
    assert!(stderr.contains("priority '5.5'"), "{stderr}");

    Ok(())
}

#[test]
fn test_missing_task_file() -> Result<()> {
    let fixture = Fixture::new()?;

    let output = fixture.run_prioq(&["run", "does_not_exist.yml"])?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read tasks"), "{stderr}");

    Ok(())
}

#[test]
/// Malformed `--task` values are rejected by the argument parser.
fn test_malformed_inline_task() -> Result<()> {
    let fixture = Fixture::new()?;

    let output = fixture.run_prioq(&["run", "-t", "echo without priority"])?;

    assert_eq!(output.status.code(), Some(2));

    Ok(())
}

#[test]
fn test_empty_run() -> Result<()> {
    let fixture = Fixture::new()?;

    let output = fixture.run_prioq(&["run"])?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "No tasks have been processed.\n");

    Ok(())
}

#[test]
/// The table contains every task and a summary line.
fn test_table_output() -> Result<()> {
    let fixture = Fixture::new()?;

    let output = fixture.run_prioq(&["run", "-t", "6:echo table", "-t", "2:exit 4"])?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    for expected in [
        "Priority",
        "echo table",
        "SUCCESS",
        "ERROR",
        "2 task(s) processed in",
        "1 failed",
    ] {
        assert!(stdout.contains(expected), "'{expected}' missing in:\n{stdout}");
    }

    Ok(())
}

#[test]
/// With `--auto-clear` the processed tasks are still reported.
fn test_auto_clear_still_reports() -> Result<()> {
    let fixture = Fixture::new()?;

    let (output, tasks) = fixture.run_json(&["--auto-clear", "-t", "5:echo cleared"])?;

    assert!(output.status.success());
    assert_eq!(field(&tasks, "state"), vec!["SUCCESS"]);

    Ok(())
}
