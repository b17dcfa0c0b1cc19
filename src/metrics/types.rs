//! Graph definition types and the metric source trait

use crate::error::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tokio_util::sync::CancellationToken;

/// Unit of a graph's values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Float,
    Integer,
    Percentage,
    Seconds,
    Bytes,
    #[serde(rename = "bytes/sec")]
    BytesPerSecond,
    Iops,
}

/// One line on a graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    /// Key the value is looked up under in the fetched map
    pub name: String,
    pub label: String,
    /// Report the per-minute rate of change instead of the raw value
    #[serde(skip)]
    pub diff: bool,
    pub stacked: bool,
}

impl Metric {
    /// Create a plain gauge metric
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            diff: false,
            stacked: false,
        }
    }

    /// Mark the metric as a diff metric
    #[must_use]
    pub fn diff(mut self) -> Self {
        self.diff = true;
        self
    }

    /// Mark the metric as stacked
    #[must_use]
    pub fn stacked(mut self) -> Self {
        self.stacked = true;
        self
    }
}

/// A graph and the metrics drawn on it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Graph {
    pub label: String,
    pub unit: Unit,
    pub metrics: Vec<Metric>,
}

impl Graph {
    /// Create a graph
    pub fn new(label: impl Into<String>, unit: Unit, metrics: Vec<Metric>) -> Self {
        Self {
            label: label.into(),
            unit,
            metrics,
        }
    }

    /// Check if any metric on this graph is a diff metric
    pub fn has_diff(&self) -> bool {
        self.metrics.iter().any(|m| m.diff)
    }
}

/// Source of metric values for the reporter
#[async_trait]
pub trait MetricSource: Send + Sync {
    /// Graphs keyed by graph name (without prefix)
    fn graph_definition(&self) -> BTreeMap<String, Graph>;

    /// Current values keyed by metric name
    async fn fetch_metrics(&self, cancel: &CancellationToken) -> Result<HashMap<String, f64>>;

    /// Prefix prepended to every graph and metric key
    fn metric_key_prefix(&self) -> &str;
}
