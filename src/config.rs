//! Plugin configuration
//!
//! One `PluginConfig` is built per process (from CLI flags) and handed down to
//! the components that need it.

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Metric key prefix used when none is configured
pub const DEFAULT_METRIC_KEY_PREFIX: &str = "kinesis";

/// Configuration for one plugin run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginConfig {
    /// Kinesis stream to count shards of
    pub stream_name: String,
    /// AWS region override
    pub region: Option<String>,
    /// Kinesis endpoint override (local emulators, VPC endpoints)
    pub endpoint_url: Option<String>,
    /// Metric key prefix override
    pub metric_key_prefix: Option<String>,
    /// File where the reporter keeps values between runs
    pub tempfile: Option<PathBuf>,
}

impl PluginConfig {
    /// Create a config for the given stream
    pub fn new(stream_name: impl Into<String>) -> Self {
        Self {
            stream_name: stream_name.into(),
            ..Default::default()
        }
    }

    /// Set the region override
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the endpoint override
    #[must_use]
    pub fn endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    /// Set the metric key prefix
    #[must_use]
    pub fn metric_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.metric_key_prefix = Some(prefix.into());
        self
    }

    /// Set the tempfile path
    #[must_use]
    pub fn tempfile(mut self, path: impl Into<PathBuf>) -> Self {
        self.tempfile = Some(path.into());
        self
    }

    /// Check the config before any remote call is made
    pub fn validate(&self) -> Result<()> {
        if self.stream_name.trim().is_empty() {
            return Err(Error::missing_field("stream-name"));
        }

        if let Some(prefix) = self.metric_key_prefix.as_deref().filter(|p| !p.is_empty()) {
            if let Some(c) = prefix
                .chars()
                .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
            {
                return Err(Error::config(format!(
                    "metric-key-prefix '{prefix}' contains invalid character '{c}'"
                )));
            }
        }

        Ok(())
    }

    /// Effective metric key prefix
    pub fn key_prefix(&self) -> &str {
        self.metric_key_prefix
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_METRIC_KEY_PREFIX)
    }

    /// Effective tempfile path
    pub fn tempfile_path(&self) -> PathBuf {
        match &self.tempfile {
            Some(path) => path.clone(),
            None => std::env::temp_dir().join(format!("mackerel-plugin-{}", self.key_prefix())),
        }
    }
}
