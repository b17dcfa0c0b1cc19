//! Scripted `ListShardsApi` fakes for tests

use super::ListShardsApi;
use crate::error::{Error, Result};
use crate::types::{ListShardsPage, ListShardsRequest, Shard};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Build a page of `count` shards
pub(crate) fn page(count: usize, next_token: Option<&str>) -> ListShardsPage {
    let shards = (0..count)
        .map(|i| Shard::new(format!("shardId-{i:012}")))
        .collect();
    ListShardsPage::new(shards, next_token.map(ToString::to_string))
}

/// Replays a fixed sequence of responses and records every request
#[derive(Debug, Default)]
pub(crate) struct ScriptedClient {
    responses: Mutex<VecDeque<Result<ListShardsPage>>>,
    requests: Mutex<Vec<ListShardsRequest>>,
}

impl ScriptedClient {
    pub(crate) fn new(responses: Vec<Result<ListShardsPage>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Pages of the given sizes, each with a token except the last
    pub(crate) fn with_pages(sizes: &[usize]) -> Self {
        let responses = sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| {
                let token = (i + 1 < sizes.len()).then(|| format!("token-{}", i + 1));
                Ok(page(size, token.as_deref()))
            })
            .collect();
        Self::new(responses)
    }

    pub(crate) fn requests(&self) -> Vec<ListShardsRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ListShardsApi for ScriptedClient {
    async fn list_shards(&self, request: ListShardsRequest) -> Result<ListShardsPage> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Other("script exhausted".to_string())))
    }
}

/// Never answers; used to exercise cancellation
#[derive(Debug, Default)]
pub(crate) struct PendingClient;

#[async_trait]
impl ListShardsApi for PendingClient {
    async fn list_shards(&self, _request: ListShardsRequest) -> Result<ListShardsPage> {
        std::future::pending().await
    }
}
