//! CLI layer for fetch-zone.
//!
//! Provides the command-line interface using clap and the glue between
//! parsed arguments, the fetcher and stdout.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::{execute, execute_with};
pub use parser::Cli;
