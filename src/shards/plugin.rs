//! Shard count metric source

use super::counter::ShardCounter;
use crate::config::PluginConfig;
use crate::error::Result;
use crate::metrics::{title_case, Graph, Metric, MetricSource, Unit};
use crate::pagination::ListShardsApi;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use tokio_util::sync::CancellationToken;

/// Graph the count is drawn on
pub const SHARDS_GRAPH: &str = "shards";

/// Name of the shard count metric
pub const COUNT_METRIC: &str = "count";

/// Reports the active shard count of one stream
#[derive(Debug)]
pub struct ShardCountPlugin<C> {
    counter: ShardCounter<C>,
    stream_name: String,
    prefix: String,
}

impl<C: ListShardsApi> ShardCountPlugin<C> {
    /// Create a plugin for the stream and prefix in `config`
    pub fn new(client: C, config: &PluginConfig) -> Self {
        Self::with_counter(ShardCounter::new(client), config)
    }

    /// Create a plugin around a preconfigured counter
    pub fn with_counter(counter: ShardCounter<C>, config: &PluginConfig) -> Self {
        Self {
            counter,
            stream_name: config.stream_name.clone(),
            prefix: config.key_prefix().to_string(),
        }
    }

    /// Stream being counted
    pub fn stream_name(&self) -> &str {
        &self.stream_name
    }
}

#[async_trait]
impl<C: ListShardsApi> MetricSource for ShardCountPlugin<C> {
    fn graph_definition(&self) -> BTreeMap<String, Graph> {
        let label = format!("{} Shards", title_case(&self.prefix));
        BTreeMap::from([(
            SHARDS_GRAPH.to_string(),
            Graph::new(label, Unit::Float, vec![Metric::new(COUNT_METRIC, "Count")]),
        )])
    }

    async fn fetch_metrics(&self, cancel: &CancellationToken) -> Result<HashMap<String, f64>> {
        let count = self
            .counter
            .count_active_shards(&self.stream_name, cancel)
            .await?;
        Ok(HashMap::from([(COUNT_METRIC.to_string(), count)]))
    }

    fn metric_key_prefix(&self) -> &str {
        &self.prefix
    }
}
