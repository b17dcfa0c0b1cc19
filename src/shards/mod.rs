//! Shard counting module
//!
//! Drives a full `ListShards` traversal and reduces it to one metric value.
//!
//! # Overview
//!
//! - `ShardCounter` - Sums active shards across all pages, treating a missing
//!   stream as zero shards
//! - `ShardCountPlugin` - Exposes the count as the `shards.count` metric

mod counter;
mod plugin;

pub use counter::{ShardCounter, DEFAULT_PAGE_SIZE};
pub use plugin::{ShardCountPlugin, COUNT_METRIC, SHARDS_GRAPH};

#[cfg(test)]
mod tests;
