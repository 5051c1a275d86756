#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;
pub mod services;

use crate::models::args::Cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    // No flags of our own; clap still serves --help/--version and rejects
    // stray arguments.
    Cli::parse();

    handlers::publish::run()
}
