//! Common types used throughout the plugin
//!
//! Request and response shapes of the `ListShards` operation, independent of
//! the transport that carries them.

use chrono::{DateTime, Utc};

// ============================================================================
// Shard Filter
// ============================================================================

/// Selects which shards `ListShards` enumerates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShardFilter {
    /// Shards open at the tip of the stream (currently active)
    AtLatest,
    /// Shards open at the trim horizon
    AtTrimHorizon,
    /// All shards from the trim horizon onward, closed ones included
    FromTrimHorizon,
    /// Shards whose id sorts after the given one
    AfterShardId { shard_id: String },
    /// Shards open at the given instant
    AtTimestamp { timestamp: DateTime<Utc> },
    /// Shards open at or after the given instant
    FromTimestamp { timestamp: DateTime<Utc> },
}

// ============================================================================
// Request / Response
// ============================================================================

/// Parameters of one `ListShards` call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListShardsRequest {
    /// Name of the stream to enumerate
    pub stream_name: Option<String>,
    /// Shard lifecycle filter
    pub shard_filter: Option<ShardFilter>,
    /// Page-size cap; `None` lets the server pick its default
    pub max_results: Option<i32>,
    /// Continuation token from the previous page
    pub next_token: Option<String>,
}

impl ListShardsRequest {
    /// Create a request for the given stream
    pub fn new(stream_name: impl Into<String>) -> Self {
        Self {
            stream_name: Some(stream_name.into()),
            ..Default::default()
        }
    }

    /// Set the shard filter
    #[must_use]
    pub fn shard_filter(mut self, filter: ShardFilter) -> Self {
        self.shard_filter = Some(filter);
        self
    }

    /// Set the page-size cap
    #[must_use]
    pub fn max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Set the continuation token to resume from
    #[must_use]
    pub fn next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }
}

/// Descriptor of one shard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shard {
    pub shard_id: String,
    pub parent_shard_id: Option<String>,
    pub adjacent_parent_shard_id: Option<String>,
}

impl Shard {
    /// Create a shard descriptor with only its id set
    pub fn new(shard_id: impl Into<String>) -> Self {
        Self {
            shard_id: shard_id.into(),
            ..Default::default()
        }
    }
}

/// One page of `ListShards` results
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListShardsPage {
    pub shards: Vec<Shard>,
    /// Token for the next page; absent or empty when the listing is complete
    pub next_token: Option<String>,
}

impl ListShardsPage {
    /// Create a page
    pub fn new(shards: Vec<Shard>, next_token: Option<String>) -> Self {
        Self { shards, next_token }
    }

    /// Number of shard descriptors on this page
    pub fn len(&self) -> usize {
        self.shards.len()
    }

    /// Check if the page carries no shards
    pub fn is_empty(&self) -> bool {
        self.shards.is_empty()
    }
}
