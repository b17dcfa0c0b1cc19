//! CLI runner - executes one plugin run

use crate::cli::commands::Cli;
use crate::config::PluginConfig;
use crate::error::Result;
use crate::kinesis::KinesisClient;
use crate::metrics::Reporter;
use crate::pagination::ListShardsApi;
use crate::shards::ShardCountPlugin;
use std::io::Write;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the plugin against AWS, printing to stdout
    pub async fn run(&self) -> Result<()> {
        let config = self.cli.to_config();
        config.validate()?;

        let cancel = CancellationToken::new();
        let watcher = cancel.clone();
        let interrupt = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, cancelling");
                watcher.cancel();
            }
        });

        let client = KinesisClient::from_config(&config).await;
        let mut stdout = std::io::stdout().lock();
        let result = report(&config, client, &cancel, &mut stdout).await;

        interrupt.abort();
        result
    }
}

/// Count the configured stream's shards through `client` and print the result
pub async fn report<C, W>(
    config: &PluginConfig,
    client: C,
    cancel: &CancellationToken,
    out: &mut W,
) -> Result<()>
where
    C: ListShardsApi,
    W: Write,
{
    config.validate()?;

    let plugin = ShardCountPlugin::new(client, config);
    let reporter = Reporter::new(config.tempfile_path());
    debug!(
        "Reporting shards of '{}' (tempfile: {})",
        plugin.stream_name(),
        reporter.tempfile().display()
    );

    reporter.run(&plugin, cancel, out).await?;
    out.flush()?;
    Ok(())
}
