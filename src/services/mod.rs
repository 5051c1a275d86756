pub mod cargo;
pub mod manifest;
pub mod prompt;
