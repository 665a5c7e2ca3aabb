use async_trait::async_trait;
use k8s_openapi::api::core::v1 as corev1;
use kube::api::ListParams;
use kube::{
    Api,
    Client,
};
#[cfg(test)]
use mockall::automock;

/// One chunk of a (possibly paginated) pod list.
#[derive(Debug, Default)]
pub struct PodPage {
    pub items: Vec<corev1::Pod>,
    pub continue_token: Option<String>,
}

/// Read-only view of the cluster API used to build a report.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ClusterQuery: Send + Sync {
    async fn list_nodes(&self) -> kube::Result<Vec<corev1::Node>>;

    async fn list_pods(&self, params: &ListParams) -> kube::Result<PodPage>;
}

pub struct KubeCluster {
    client: Client,
}

impl KubeCluster {
    pub fn new(client: Client) -> KubeCluster {
        return KubeCluster { client };
    }
}

#[async_trait]
impl ClusterQuery for KubeCluster {
    async fn list_nodes(&self) -> kube::Result<Vec<corev1::Node>> {
        let node_querier: Api<corev1::Node> = Api::all(self.client.clone());
        let nodes = node_querier.list(&ListParams::default()).await?;
        return Ok(nodes.items);
    }

    async fn list_pods(&self, params: &ListParams) -> kube::Result<PodPage> {
        let pod_querier: Api<corev1::Pod> = Api::all(self.client.clone());
        let pods = pod_querier.list(params).await?;
        return Ok(PodPage {
            continue_token: pods.metadata.continue_,
            items: pods.items,
        });
    }
}
