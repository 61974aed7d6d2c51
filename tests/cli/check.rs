use anyhow::Result;

use crate::{CliTest, stderr_of, stdout_of};

#[test]
fn test_clean_file() -> Result<()> {
    let test = CliTest::with_file("app.py", "x = 1\nprint(x)\n")?;

    let output = test.check("app.py")?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("Checked app.py - no issues found"));

    Ok(())
}

#[test]
fn test_unused_variable() -> Result<()> {
    let test = CliTest::with_file("app.py", "x = 1\ny = 2\nprint(x)\n")?;

    let output = test.check("app.py")?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("warning: \"y\"  unused-variable"));
    assert!(stdout.contains("--> app.py:2"));
    assert!(stdout.contains("2 | y = 2"));
    assert!(stdout.contains("1 problems (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_unused_and_star_imports() -> Result<()> {
    let test = CliTest::with_file(
        "app.py",
        "import os\nimport sys\nfrom math import *\nprint(sys.path)\n",
    )?;

    let output = test.check("app.py")?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("warning: \"os\"  unused-import"));
    assert!(stdout.contains("--> app.py:1"));
    assert!(stdout.contains("warning: \"math\"  star-import"));
    assert!(stdout.contains("--> app.py:0"));
    assert!(!stdout.contains("\"sys\""));

    Ok(())
}

#[test]
fn test_syntax_error() -> Result<()> {
    let test = CliTest::with_file("broken.py", "x = ")?;

    let output = test.check("broken.py")?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("error:"));
    assert!(stdout.contains("syntax-error"));
    assert!(stdout.contains("--> broken.py:1"));

    Ok(())
}

#[test]
fn test_missing_argument_prints_usage() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("Usage"));

    Ok(())
}

#[test]
fn test_missing_file_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.check("nope.py")?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Failed to read file"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("Python file"));

    Ok(())
}
