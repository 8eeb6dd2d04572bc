//! CLI, configuration file, output rendering
//!
//! This crate provides the `studentlund` command-line interface.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;

pub use cli::Cli;
pub use error::{ClientError, ClientResult};
