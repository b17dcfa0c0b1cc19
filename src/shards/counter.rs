//! Active shard counter

use crate::error::{Result, ResultExt};
use crate::pagination::{ListShardsApi, ListShardsPaginator};
use crate::types::{ListShardsRequest, ShardFilter};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Page-size cap requested from `ListShards`
pub const DEFAULT_PAGE_SIZE: i32 = 100;

/// Counts the currently active shards of a stream
#[derive(Debug, Clone)]
pub struct ShardCounter<C> {
    client: C,
    page_size: i32,
}

impl<C: ListShardsApi> ShardCounter<C> {
    /// Create a counter over `client`
    pub fn new(client: C) -> Self {
        Self {
            client,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set the page-size cap; non-positive lets the server decide
    #[must_use]
    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Get the underlying client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Base request for one traversal of `stream_name`
    pub fn request_for(&self, stream_name: &str) -> ListShardsRequest {
        ListShardsRequest::new(stream_name)
            .shard_filter(ShardFilter::AtLatest)
            .max_results(self.page_size)
    }

    /// Count the shards open at the tip of `stream_name`
    ///
    /// A stream that does not exist counts as zero shards, even when earlier
    /// pages were already counted. Any other failure aborts the traversal.
    pub async fn count_active_shards(
        &self,
        stream_name: &str,
        cancel: &CancellationToken,
    ) -> Result<f64> {
        let request = self.request_for(stream_name);
        let mut paginator = ListShardsPaginator::new(&self.client, Some(request));

        let mut count = 0.0;
        let mut pages = 0;
        while paginator.has_more_pages() {
            match paginator.next_page(cancel).await {
                Ok(page) => {
                    count += page.len() as f64;
                    pages += 1;
                }
                Err(e) if e.is_resource_not_found() => {
                    warn!("Stream '{stream_name}' not found, reporting 0 shards");
                    return Ok(0.0);
                }
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("failed to list shards for stream '{stream_name}'")
                    });
                }
            }
        }

        debug!("Stream '{stream_name}' has {count} active shards ({pages} pages)");
        Ok(count)
    }
}
