//! `ListShards` paginator

use super::types::{ListShardsApi, ListShardsPaginatorOptions};
use crate::error::{Error, Result};
use crate::types::{ListShardsPage, ListShardsRequest};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Paginator for `ListShards`
///
/// Holds the cursor state of a single traversal. Create one per traversal and
/// drive it with [`has_more_pages`](Self::has_more_pages) and
/// [`next_page`](Self::next_page).
#[derive(Debug)]
pub struct ListShardsPaginator<'a, C: ListShardsApi + ?Sized> {
    options: ListShardsPaginatorOptions,
    client: &'a C,
    params: ListShardsRequest,
    next_token: Option<String>,
    first_page: bool,
}

impl<'a, C: ListShardsApi + ?Sized> ListShardsPaginator<'a, C> {
    /// Create a paginator over `client` for the given base request
    ///
    /// An absent request is treated as an empty one. The request's own
    /// `max_results` seeds the page-size limit, and its `next_token`, if any,
    /// is where the first fetch resumes from.
    pub fn new(client: &'a C, params: Option<ListShardsRequest>) -> Self {
        let params = params.unwrap_or_default();

        let mut options = ListShardsPaginatorOptions::default();
        if let Some(max_results) = params.max_results {
            options.limit = max_results;
        }

        Self {
            options,
            client,
            next_token: params.next_token.clone(),
            params,
            first_page: true,
        }
    }

    /// Override the page-size limit
    #[must_use]
    pub fn limit(mut self, limit: i32) -> Self {
        self.options.limit = limit;
        self
    }

    /// Toggle the duplicate-token guard
    #[must_use]
    pub fn stop_on_duplicate_token(mut self, stop: bool) -> Self {
        self.options.stop_on_duplicate_token = stop;
        self
    }

    /// Current options
    pub fn options(&self) -> &ListShardsPaginatorOptions {
        &self.options
    }

    /// Token the next fetch will send
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    /// Check if no page has been fetched yet
    pub fn is_first_page(&self) -> bool {
        self.first_page
    }

    /// Returns true while there are pages left to fetch
    pub fn has_more_pages(&self) -> bool {
        self.first_page || self.next_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Fetch the next page
    ///
    /// Issues exactly one remote call. On failure or cancellation the cursor
    /// is left untouched, so the same page can be requested again.
    pub async fn next_page(&mut self, cancel: &CancellationToken) -> Result<ListShardsPage> {
        if !self.has_more_pages() {
            return Err(Error::NoMorePages);
        }

        let mut params = self.params.clone();
        params.next_token.clone_from(&self.next_token);
        params.max_results = (self.options.limit > 0).then_some(self.options.limit);

        debug!(
            "Fetching shard page (first: {}, token: {}, limit: {:?})",
            self.first_page,
            params.next_token.is_some(),
            params.max_results
        );

        let page = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(Error::Cancelled),
            result = self.client.list_shards(params) => result?,
        };

        let mut next_token = page.next_token.clone().filter(|t| !t.is_empty());
        if self.options.stop_on_duplicate_token
            && self.next_token.is_some()
            && next_token == self.next_token
        {
            warn!("Server returned the token it was sent, ending pagination");
            next_token = None;
        }

        self.first_page = false;
        self.next_token = next_token;

        debug!(
            "Fetched {} shards, more pages: {}",
            page.len(),
            self.has_more_pages()
        );
        Ok(page)
    }
}
