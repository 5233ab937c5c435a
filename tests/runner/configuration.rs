use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::helper::*;

#[test]
/// The shell from the config file is used to run commands.
fn test_configured_shell() -> Result<()> {
    let fixture = Fixture::with_config("runner:\n  shell_command: ['sh', '-e', '-c']\n")?;

    let (output, tasks) = fixture.run_json(&["-t", "5:false; echo unreachable"])?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(field(&tasks, "state"), vec!["ERROR"]);
    assert_eq!(tasks[0]["output"], serde_json::json!([]));

    Ok(())
}

#[test]
/// Profiles overwrite the base configuration.
fn test_profile() -> Result<()> {
    let fixture = Fixture::with_config(
        "runner:\n  shell_command: ['does_not_exist']\nprofiles:\n  working:\n    runner:\n      shell_command: ['sh', '-c']\n",
    )?;

    let (output, tasks) = fixture.run_json(&["-t", "5:echo profile"])?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(field(&tasks, "state"), vec!["ERROR"]);

    let mut args = vec!["--profile", "working", "run", "--json", "-t", "5:echo profile"];
    let output = fixture.run_prioq(&args)?;
    assert!(output.status.success());

    args[1] = "unknown";
    let output = fixture.run_prioq(&args)?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Couldn't find profile"), "{stderr}");

    Ok(())
}

#[test]
fn test_missing_config_file() -> Result<()> {
    let fixture = Fixture::new()?;
    std::fs::remove_file(&fixture.config_path)?;

    let output = fixture.run_prioq(&["run"])?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error while reading configuration"), "{stderr}");

    Ok(())
}
