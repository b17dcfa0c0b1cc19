//! # Kinesis shard count plugin
//!
//! A mackerel-agent plugin reporting how many shards of a Kinesis data stream
//! are currently open.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kinesis_shard_count::{KinesisClient, PluginConfig, ShardCounter};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> kinesis_shard_count::Result<()> {
//!     let config = PluginConfig::new("orders").region("ap-northeast-1");
//!     let client = KinesisClient::from_config(&config).await;
//!
//!     let counter = ShardCounter::new(client);
//!     let count = counter
//!         .count_active_shards("orders", &CancellationToken::new())
//!         .await?;
//!     println!("{count}");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  cli::Runner  →  metrics::Reporter  (mackerel protocol)  │
//! └──────────────────────────────┬───────────────────────────┘
//!                                │ fetch_metrics
//! ┌──────────────────────────────┴───────────────────────────┐
//! │  shards::ShardCounter    sum of page sizes, not-found = 0 │
//! └──────────────────────────────┬───────────────────────────┘
//!                                │ has_more_pages / next_page
//! ┌──────────────────────────────┴───────────────────────────┐
//! │  pagination::ListShardsPaginator    token bookkeeping     │
//! └──────────────────────────────┬───────────────────────────┘
//!                                │ ListShardsApi
//! ┌──────────────────────────────┴───────────────────────────┐
//! │  kinesis::KinesisClient    aws-sdk-kinesis ListShards     │
//! └──────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the plugin
pub mod error;

/// ListShards request and response types
pub mod types;

/// Plugin configuration
pub mod config;

/// Token-based pagination of ListShards
pub mod pagination;

/// AWS SDK backed ListShards client
pub mod kinesis;

/// Shard counting
pub mod shards;

/// mackerel-agent plugin output
pub mod metrics;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::PluginConfig;
pub use kinesis::KinesisClient;
pub use pagination::{ListShardsApi, ListShardsPaginator};
pub use shards::{ShardCountPlugin, ShardCounter};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
