//! Layered command configuration: built-in defaults, then an optional TOML file, then
//! command-line flags.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;
