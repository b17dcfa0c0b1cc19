//! `ListShards` over the AWS SDK

use crate::config::PluginConfig;
use crate::error::{Error, Result};
use crate::pagination::ListShardsApi;
use crate::types::{ListShardsPage, ListShardsRequest, Shard, ShardFilter};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_kinesis::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_kinesis::operation::list_shards::ListShardsError;
use aws_sdk_kinesis::primitives::DateTime;
use aws_sdk_kinesis::types::{self as kinesis, ShardFilterType};
use tracing::debug;

/// Kinesis client implementing `ListShardsApi`
#[derive(Debug, Clone)]
pub struct KinesisClient {
    client: aws_sdk_kinesis::Client,
}

impl KinesisClient {
    /// Wrap an existing SDK client
    pub fn new(client: aws_sdk_kinesis::Client) -> Self {
        Self { client }
    }

    /// Build a client from the default AWS config chain
    ///
    /// The plugin config may override the region and the endpoint.
    pub async fn from_config(config: &PluginConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.clone());
        }

        let sdk_config = loader.load().await;
        debug!("Loaded AWS config (region: {:?})", sdk_config.region());
        Self::new(aws_sdk_kinesis::Client::new(&sdk_config))
    }

    /// Get the underlying SDK client
    pub fn inner(&self) -> &aws_sdk_kinesis::Client {
        &self.client
    }
}

#[async_trait]
impl ListShardsApi for KinesisClient {
    async fn list_shards(&self, request: ListShardsRequest) -> Result<ListShardsPage> {
        let mut call = self
            .client
            .list_shards()
            .set_max_results(request.max_results);

        // The token already identifies the stream and filter
        call = match request.next_token {
            Some(token) => call.next_token(token),
            None => {
                let shard_filter = request.shard_filter.as_ref().map(to_sdk_filter).transpose()?;
                call.set_stream_name(request.stream_name).set_shard_filter(shard_filter)
            }
        };

        let output = call.send().await.map_err(api_error)?;

        let shards = output
            .shards()
            .iter()
            .map(|shard| Shard {
                shard_id: shard.shard_id().to_string(),
                parent_shard_id: shard.parent_shard_id().map(ToString::to_string),
                adjacent_parent_shard_id: shard
                    .adjacent_parent_shard_id()
                    .map(ToString::to_string),
            })
            .collect();

        Ok(ListShardsPage::new(shards, output.next_token))
    }
}

pub(super) fn to_sdk_filter(filter: &ShardFilter) -> Result<kinesis::ShardFilter> {
    let builder = match filter {
        ShardFilter::AtLatest => kinesis::ShardFilter::builder().r#type(ShardFilterType::AtLatest),
        ShardFilter::AtTrimHorizon => {
            kinesis::ShardFilter::builder().r#type(ShardFilterType::AtTrimHorizon)
        }
        ShardFilter::FromTrimHorizon => {
            kinesis::ShardFilter::builder().r#type(ShardFilterType::FromTrimHorizon)
        }
        ShardFilter::AfterShardId { shard_id } => kinesis::ShardFilter::builder()
            .r#type(ShardFilterType::AfterShardId)
            .shard_id(shard_id),
        ShardFilter::AtTimestamp { timestamp } => kinesis::ShardFilter::builder()
            .r#type(ShardFilterType::AtTimestamp)
            .timestamp(DateTime::from_millis(timestamp.timestamp_millis())),
        ShardFilter::FromTimestamp { timestamp } => kinesis::ShardFilter::builder()
            .r#type(ShardFilterType::FromTimestamp)
            .timestamp(DateTime::from_millis(timestamp.timestamp_millis())),
    };

    builder
        .build()
        .map_err(|e| Error::config(format!("invalid shard filter: {e}")))
}

/// Convert an SDK failure, keeping the service's error code when there is one
fn api_error(err: SdkError<ListShardsError>) -> Error {
    match err.as_service_error() {
        Some(service) => Error::Api {
            code: service.code().map(ToString::to_string),
            message: service
                .message()
                .map_or_else(|| DisplayErrorContext(&err).to_string(), ToString::to_string),
        },
        None => Error::api(None, DisplayErrorContext(&err).to_string()),
    }
}
