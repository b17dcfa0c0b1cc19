//! Pagination module
//!
//! Token-based traversal of the `ListShards` operation.
//!
//! # Overview
//!
//! The pagination module turns a remotely paginated, size-limited listing call
//! into two primitives: "are there more pages" and "fetch the next page". The
//! continuation token arrives embedded in the previous page, so termination is
//! known without issuing another call.
//!
//! - `ListShardsApi` - The one-method capability a paginator drives
//! - `ListShardsPaginator` - Cursor bookkeeping for one traversal

mod paginator;
mod types;

pub use paginator::ListShardsPaginator;
pub use types::{ListShardsApi, ListShardsPaginatorOptions};

#[cfg(test)]
pub(crate) mod mock;
