pub mod args;
pub mod manifest;
