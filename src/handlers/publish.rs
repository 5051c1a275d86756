use crate::services::{cargo, manifest, prompt};
use anyhow::Result;

/// Manifest location, fixed by convention: the tool runs from the crate root.
const MANIFEST_PATH: &str = "Cargo.toml";

/// Asks the operator for confirmation and, on a `y`, publishes the crate.
///
/// # Result
/// Returns `Ok(())` whether the operator confirmed or declined. Publishing
/// is irreversible, so anything but an explicit `y` leaves the registry
/// untouched.
///
/// # Errors
/// Returns an error if the manifest is unreadable or unparseable, if the
/// terminal cannot be used, or if `cargo publish` cannot be started.
pub fn run() -> Result<()> {
    let version = manifest::read_version(MANIFEST_PATH)?;
    let answer = prompt::ask(&prompt::question_for(version.as_deref()))?;

    if prompt::is_affirmative(&answer) {
        println!("🚀 Publishing to crates.io...");
        cargo::run_publish()?;
    } else {
        println!("🚫 Publish aborted.");
    }

    Ok(())
}
