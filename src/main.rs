use clap::Parser;
use kube::Client;
use tracing::*;
use tracing_subscriber::EnvFilter;

mod aggregate;
mod cluster;
mod error;
mod nodes;
mod quantity;
mod render;
mod report;
mod resources;
mod util;
mod utilization;
mod workloads;

#[cfg(test)]
mod fixtures;

use crate::cluster::KubeCluster;
use crate::error::ReportResult;
use crate::report::{
    print_report,
    ReportOptions,
    DEFAULT_CHUNK_SIZE,
    DEFAULT_CONCURRENCY,
};

/// Show capacity, allocatable, and allocated resources for every cluster node.
#[derive(Parser, Debug)]
#[command(name = "kubeview", version)]
struct Options {
    /// Maximum number of pods returned per list call (0 = no limit)
    #[arg(long, env = "KUBEVIEW_CHUNK_SIZE", default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: u32,

    /// Number of nodes aggregated concurrently
    #[arg(long, env = "KUBEVIEW_CONCURRENCY", default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,
}

impl From<Options> for ReportOptions {
    fn from(opts: Options) -> ReportOptions {
        return ReportOptions { chunk_size: opts.chunk_size, concurrency: opts.concurrency };
    }
}

#[tokio::main]
async fn main() -> ReportResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let opts = Options::parse();
    debug!("starting with {:?}", opts);

    let client = Client::try_default().await?;
    let cluster = KubeCluster::new(client);

    if let Err(err) = print_report(&cluster, &opts.into()).await {
        error!("resource report failed: {}", err);
        return Err(err);
    }

    return Ok(());
}
