//! Tests for shard counting

use super::*;
use crate::config::PluginConfig;
use crate::error::{Error, RESOURCE_NOT_FOUND_CODE};
use crate::metrics::{MetricSource, Unit};
use crate::pagination::mock::{page, ScriptedClient};
use crate::types::ShardFilter;
use pretty_assertions::assert_eq;
use test_case::test_case;
use tokio_util::sync::CancellationToken;

fn not_found() -> Error {
    Error::api(
        Some(RESOURCE_NOT_FOUND_CODE),
        "Stream orders under account 123456789012 not found.",
    )
}

// ============================================================================
// Counting Tests
// ============================================================================

#[test_case(&[5], 5.0 ; "single page")]
#[test_case(&[100, 100, 37], 237.0 ; "three pages")]
#[test_case(&[0], 0.0 ; "empty stream")]
#[test_case(&[0, 4, 0], 4.0 ; "empty pages in between")]
#[tokio::test]
async fn test_count_sums_all_pages(sizes: &[usize], expected: f64) {
    let client = ScriptedClient::with_pages(sizes);
    let counter = ShardCounter::new(&client);

    let count = counter
        .count_active_shards("orders", &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(count, expected);
    assert_eq!(client.calls(), sizes.len());
}

#[tokio::test]
async fn test_request_shape() {
    let client = ScriptedClient::with_pages(&[3, 2]);
    let counter = ShardCounter::new(&client);

    counter
        .count_active_shards("orders", &CancellationToken::new())
        .await
        .unwrap();

    let requests = client.requests();
    assert_eq!(requests.len(), 2);
    for request in &requests {
        assert_eq!(request.stream_name.as_deref(), Some("orders"));
        assert_eq!(request.shard_filter, Some(ShardFilter::AtLatest));
        assert_eq!(request.max_results, Some(DEFAULT_PAGE_SIZE));
    }
    assert_eq!(requests[0].next_token, None);
    assert_eq!(requests[1].next_token.as_deref(), Some("token-1"));
}

#[tokio::test]
async fn test_zero_page_size_sends_no_cap() {
    let client = ScriptedClient::with_pages(&[3]);
    let counter = ShardCounter::new(&client).with_page_size(0);

    counter
        .count_active_shards("orders", &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(client.requests()[0].max_results, None);
}

// ============================================================================
// Not Found Tests
// ============================================================================

#[tokio::test]
async fn test_not_found_on_first_page() {
    let client = ScriptedClient::new(vec![Err(not_found())]);
    let counter = ShardCounter::new(&client);

    let count = counter
        .count_active_shards("orders", &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(count, 0.0);
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn test_not_found_discards_partial_count() {
    let client = ScriptedClient::new(vec![
        Ok(page(100, Some("token-1"))),
        Ok(page(100, Some("token-2"))),
        Err(not_found()),
    ]);
    let counter = ShardCounter::new(&client);

    let count = counter
        .count_active_shards("orders", &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(count, 0.0);
    assert_eq!(client.calls(), 3);
}

// ============================================================================
// Failure Tests
// ============================================================================

#[test_case(1 ; "first call")]
#[test_case(2 ; "second call")]
#[test_case(3 ; "last call")]
#[tokio::test]
async fn test_failure_propagates_without_count(fail_on: usize) {
    let mut responses = vec![
        Ok(page(100, Some("token-1"))),
        Ok(page(100, Some("token-2"))),
        Ok(page(37, None)),
    ];
    responses[fail_on - 1] = Err(Error::api(Some("AccessDeniedException"), "not authorized"));
    let client = ScriptedClient::new(responses);
    let counter = ShardCounter::new(&client);

    let err = counter
        .count_active_shards("orders", &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), Some("AccessDeniedException"));
    assert!(err.to_string().starts_with("failed to list shards for stream 'orders'"));
    assert!(matches!(err, Error::Context { .. }));
    assert_eq!(client.calls(), fail_on);
}

#[tokio::test]
async fn test_failure_without_code_propagates() {
    let client = ScriptedClient::new(vec![Err(Error::api(None, "dispatch failure"))]);
    let counter = ShardCounter::new(&client);

    let err = counter
        .count_active_shards("orders", &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err.root_cause(), Error::Api { code: None, .. }));
}

#[tokio::test]
async fn test_cancelled_traversal_is_an_error() {
    let client = ScriptedClient::with_pages(&[1]);
    let counter = ShardCounter::new(&client);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = counter
        .count_active_shards("orders", &cancel)
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(client.calls(), 0);
}

// ============================================================================
// Plugin Tests
// ============================================================================

#[tokio::test]
async fn test_plugin_fetch_metrics() {
    let client = ScriptedClient::with_pages(&[100, 100, 37]);
    let plugin = ShardCountPlugin::new(&client, &PluginConfig::new("orders"));

    let metrics = plugin
        .fetch_metrics(&CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics.get(COUNT_METRIC), Some(&237.0));
}

#[tokio::test]
async fn test_plugin_not_found_reports_zero() {
    let client = ScriptedClient::new(vec![Err(not_found())]);
    let plugin = ShardCountPlugin::new(&client, &PluginConfig::new("orders"));

    let metrics = plugin
        .fetch_metrics(&CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(metrics.get(COUNT_METRIC), Some(&0.0));
}

#[test]
fn test_plugin_graph_definition() {
    let client = ScriptedClient::default();
    let plugin = ShardCountPlugin::new(&client, &PluginConfig::new("orders"));

    assert_eq!(plugin.metric_key_prefix(), "kinesis");
    assert_eq!(plugin.stream_name(), "orders");

    let graphs = plugin.graph_definition();
    let graph = graphs.get(SHARDS_GRAPH).unwrap();
    assert_eq!(graph.label, "Kinesis Shards");
    assert_eq!(graph.unit, Unit::Float);
    assert_eq!(graph.metrics.len(), 1);
    assert_eq!(graph.metrics[0].name, "count");
    assert_eq!(graph.metrics[0].label, "Count");
    assert!(!graph.has_diff());
}

#[test]
fn test_plugin_custom_prefix_label() {
    let client = ScriptedClient::default();
    let config = PluginConfig::new("orders").metric_key_prefix("data-stream");
    let plugin = ShardCountPlugin::new(&client, &config);

    assert_eq!(plugin.metric_key_prefix(), "data-stream");
    assert_eq!(
        plugin.graph_definition()[SHARDS_GRAPH].label,
        "Data-Stream Shards"
    );
}
