//! Metric reporting module
//!
//! Speaks the mackerel-agent plugin protocol on stdout.
//!
//! # Overview
//!
//! - `MetricSource` - Anything that can describe its graphs and fetch values
//! - `Graph` / `Metric` / `Unit` - Graph definition types
//! - `Reporter` - Prints graph definitions or metric values, keeping diff
//!   metrics' previous values in a tempfile

mod reporter;
mod types;

pub use reporter::{title_case, Reporter, META_ENV};
pub use types::{Graph, Metric, MetricSource, Unit};
