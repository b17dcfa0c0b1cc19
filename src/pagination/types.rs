//! Pagination types and traits
//!
//! Defines the remote capability the paginator depends on and its options.

use crate::error::Result;
use crate::types::{ListShardsPage, ListShardsRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// A client able to execute one `ListShards` call
///
/// Implementations perform exactly one remote call per invocation. Retries,
/// if any, happen underneath this trait and are invisible to the paginator.
#[async_trait]
pub trait ListShardsApi: Send + Sync {
    /// Fetch one page of shards for the given request
    async fn list_shards(&self, request: ListShardsRequest) -> Result<ListShardsPage>;
}

#[async_trait]
impl<'a, T: ListShardsApi + ?Sized> ListShardsApi for &'a T {
    async fn list_shards(&self, request: ListShardsRequest) -> Result<ListShardsPage> {
        (**self).list_shards(request).await
    }
}

#[async_trait]
impl<T: ListShardsApi + ?Sized> ListShardsApi for Arc<T> {
    async fn list_shards(&self, request: ListShardsRequest) -> Result<ListShardsPage> {
        (**self).list_shards(request).await
    }
}

/// Options for a `ListShardsPaginator`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListShardsPaginatorOptions {
    /// Page-size cap sent with every request; non-positive means server default
    pub limit: i32,
    /// End the traversal when the server hands back the token it was sent
    pub stop_on_duplicate_token: bool,
}

impl Default for ListShardsPaginatorOptions {
    fn default() -> Self {
        Self {
            limit: 0,
            stop_on_duplicate_token: true,
        }
    }
}
