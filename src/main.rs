//! mackerel-plugin-kinesis-shard-count
//!
//! Prints the number of active shards of a Kinesis data stream in the
//! mackerel-agent plugin format.

use clap::Parser;
use kinesis_shard_count::cli::{Cli, Runner};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging; stdout carries the metrics
    let mut filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();
    if cli.verbose {
        if let Ok(directive) = "kinesis_shard_count=debug".parse() {
            filter = filter.add_directive(directive);
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        println!("{e}");
        std::process::exit(1);
    }
}
