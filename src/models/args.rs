//! # CLI Argument Definitions
//!
//! This module defines the command-line interface (CLI) structure using the
//! `clap` crate. The helper deliberately takes no subcommands or flags of its
//! own; everything it needs comes from the manifest and the operator's answer.

use clap::Parser;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "publish-confirm")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Ask before publishing the current crate to crates.io")]
pub struct Cli {}
