use anyhow::{Context, Result};
use std::process::{Command, Stdio};

/// Runs `cargo publish`, inheriting the operator's terminal.
///
/// # Result
/// Returns `Ok(())` once the child exits, whatever its status; the registry
/// reports success or failure on the inherited streams and this tool does
/// not translate it into its own exit code.
///
/// # Errors
/// Returns an error only if the command cannot be started.
pub fn run_publish() -> Result<()> {
    Command::new("cargo")
        .arg("publish")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .context("Failed to execute cargo publish. Is cargo in your PATH?")?;

    Ok(())
}
