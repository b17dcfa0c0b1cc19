//! CLI module
//!
//! Command-line interface of the plugin. mackerel-agent invokes the binary
//! periodically; each run performs one fresh shard traversal.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::{report, Runner};
