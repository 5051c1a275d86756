use serde::Deserialize;

/// The subset of a `Cargo.toml` manifest this tool reads.
///
/// Both the `[package]` table and its `version` key are optional: a manifest
/// without them is still valid, it just carries no version.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub package: Option<Package>,
}

#[derive(Debug, Deserialize)]
pub struct Package {
    pub version: Option<String>,
}
