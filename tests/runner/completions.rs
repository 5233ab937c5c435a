use std::process::Command;

use anyhow::Result;
use assert_cmd::prelude::*;
use rstest::rstest;
use tempfile::TempDir;

/// Make sure the completion script for every shell can be generated.
#[rstest]
#[case("bash")]
#[case("elvish")]
#[case("fish")]
#[case("power-shell")]
#[case("zsh")]
fn test_generate_completions(#[case] shell: &str) -> Result<()> {
    let tempdir = TempDir::new()?;

    Command::cargo_bin("prioq")?
        .args(["completions", shell])
        .arg(tempdir.path())
        .assert()
        .success();

    assert_eq!(std::fs::read_dir(tempdir.path())?.count(), 1);

    Ok(())
}

#[test]
fn test_completions_to_stdout() -> Result<()> {
    let output = Command::cargo_bin("prioq")?
        .args(["completions", "bash"])
        .output()?;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("prioq"));

    Ok(())
}
