use crate::models::manifest::Manifest;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads `package.version` from a manifest file.
///
/// # Result
/// Returns the version string, or `None` when the `[package]` table or its
/// `version` key is missing. Absence is a valid state, not an error.
///
/// # Errors
/// Returns an error if the manifest cannot be read or is not valid TOML.
pub fn read_version(path: impl AsRef<Path>) -> Result<Option<String>> {
    let path = path.as_ref();

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest at: {}", path.display()))?;
    let manifest: Manifest = toml::from_str(&content)
        .with_context(|| format!("Failed to parse manifest at: {}", path.display()))?;

    Ok(manifest.package.and_then(|package| package.version))
}

#[test]
fn version_is_extracted_from_package_table() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("Cargo.toml");
    std::fs::write(&path, "[package]\nname = \"demo\"\nversion = \"1.2.3\"\n")
        .expect("write manifest");

    let version = read_version(&path).expect("read version");
    assert_eq!(version, Some("1.2.3".to_owned()));
}

#[test]
fn missing_package_table_yields_no_version() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("Cargo.toml");
    std::fs::write(&path, "[dependencies]\n").expect("write manifest");

    let version = read_version(&path).expect("read version");
    assert_eq!(version, None);
}

#[test]
fn missing_version_key_yields_no_version() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("Cargo.toml");
    std::fs::write(&path, "[package]\nname = \"demo\"\n").expect("write manifest");

    let version = read_version(&path).expect("read version");
    assert_eq!(version, None);
}

#[test]
fn unreadable_manifest_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = read_version(dir.path().join("Cargo.toml")).unwrap_err();
    assert!(err.to_string().contains("read manifest"), "expected read error, got: {err}");
}

#[test]
fn invalid_toml_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("Cargo.toml");
    std::fs::write(&path, "[package\nversion =").expect("write manifest");

    let err = read_version(&path).unwrap_err();
    assert!(err.to_string().contains("parse manifest"), "expected parse error, got: {err}");
}
