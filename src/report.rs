use std::io;

use futures::{
    stream,
    StreamExt,
    TryStreamExt,
};
use tracing::*;

use crate::aggregate::allocated_resources;
use crate::cluster::ClusterQuery;
use crate::error::ReportResult;
use crate::nodes::{
    list_nodes,
    NodeResources,
};
use crate::render::render_report;
use crate::workloads::fetch_active_pods;

pub const DEFAULT_CHUNK_SIZE: u32 = 500;
pub const DEFAULT_CONCURRENCY: usize = 4;

#[derive(Clone, Debug)]
pub struct ReportOptions {
    /// Pods requested per list call; 0 disables chunking.
    pub chunk_size: u32,
    /// Nodes aggregated at the same time.
    pub concurrency: usize,
}

impl Default for ReportOptions {
    fn default() -> ReportOptions {
        return ReportOptions { chunk_size: DEFAULT_CHUNK_SIZE, concurrency: DEFAULT_CONCURRENCY };
    }
}

/// Builds a point-in-time snapshot of every node's capacity, allocatable, and
/// allocated totals. Nodes come back in listing order; the first failure
/// aborts the whole report.
pub async fn produce_report<C>(client: &C, opts: &ReportOptions) -> ReportResult<Vec<NodeResources>>
where
    C: ClusterQuery + ?Sized,
{
    let nodes = list_nodes(client).await?;

    return stream::iter(nodes)
        .map(|node| allocate_node(client, node, opts.chunk_size))
        .buffered(opts.concurrency.max(1))
        .try_collect()
        .await;
}

async fn allocate_node<C>(client: &C, node: NodeResources, chunk_size: u32) -> ReportResult<NodeResources>
where
    C: ClusterQuery + ?Sized,
{
    let pods = fetch_active_pods(client, &node.name, chunk_size).await?;
    let (allocated_requests, allocated_limits) = allocated_resources(&pods)?;
    debug!(
        "node {}: {} pods, requests cpu={} memory={}",
        node.name, pods.len(), allocated_requests.cpu, allocated_requests.memory
    );

    return Ok(NodeResources { allocated_requests, allocated_limits, ..node });
}

/// Produces the report and writes its four tables to `out`. Nothing is
/// written unless every node was aggregated successfully.
pub async fn write_report<C, W>(client: &C, opts: &ReportOptions, out: &mut W) -> ReportResult<()>
where
    C: ClusterQuery + ?Sized,
    W: io::Write,
{
    let nodes = produce_report(client, opts).await?;
    render_report(&nodes, out)?;
    return Ok(());
}

/// Produces the report and prints it to stdout.
pub async fn print_report<C>(client: &C, opts: &ReportOptions) -> ReportResult<()>
where
    C: ClusterQuery + ?Sized,
{
    return write_report(client, opts, &mut io::stdout()).await;
}
