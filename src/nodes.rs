use k8s_openapi::api::core::v1 as corev1;
use kube::ResourceExt;
use tracing::*;

use crate::cluster::ClusterQuery;
use crate::error::ReportResult;
use crate::resources::Resources;

/// Resource accounting for a single node in one report snapshot.
#[derive(Clone, Debug, Default)]
pub struct NodeResources {
    pub name: String,
    pub capacity: Resources,
    pub allocatable: Resources,
    pub allocated_requests: Resources,
    pub allocated_limits: Resources,
}

/// Lists every node with capacity and allocatable filled in; the allocated
/// totals start at zero.
pub async fn list_nodes<C>(client: &C) -> ReportResult<Vec<NodeResources>>
where
    C: ClusterQuery + ?Sized,
{
    let nodes = client.list_nodes().await?;
    info!("found {} nodes", nodes.len());

    return nodes.iter().map(node_resources).collect();
}

fn node_resources(node: &corev1::Node) -> ReportResult<NodeResources> {
    let name = node.name_any();
    let mut node_resources = NodeResources { name, ..NodeResources::default() };

    if let Some(corev1::NodeStatus { capacity, allocatable, .. }) = &node.status {
        node_resources.capacity = Resources::from_list(capacity.as_ref(), &node_resources.name)?;
        node_resources.allocatable = Resources::from_list(allocatable.as_ref(), &node_resources.name)?;
    } else {
        warn!("node {} reports no status", node_resources.name);
    }

    return Ok(node_resources);
}
