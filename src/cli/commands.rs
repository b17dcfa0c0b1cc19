//! CLI argument parsing

use crate::config::PluginConfig;
use clap::Parser;
use std::path::PathBuf;

/// mackerel-agent plugin reporting the active shard count of a Kinesis stream
#[derive(Parser, Debug, Default)]
#[command(name = "mackerel-plugin-kinesis-shard-count")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Kinesis stream name
    #[arg(long, env = "KINESIS_STREAM_NAME")]
    pub stream_name: Option<String>,

    /// AWS region
    #[arg(long)]
    pub region: Option<String>,

    /// Kinesis endpoint URL override
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// Metric key prefix
    #[arg(long)]
    pub metric_key_prefix: Option<String>,

    /// Temp file name
    #[arg(long)]
    pub tempfile: Option<PathBuf>,

    /// Verbose logging to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the plugin config from the parsed flags
    pub fn to_config(&self) -> PluginConfig {
        PluginConfig {
            stream_name: self.stream_name.clone().unwrap_or_default(),
            region: self.region.clone(),
            endpoint_url: self.endpoint_url.clone(),
            metric_key_prefix: self.metric_key_prefix.clone(),
            tempfile: self.tempfile.clone(),
        }
    }
}
