use std::collections::BTreeMap;

use k8s_openapi::api::core::v1 as corev1;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;

use crate::resources::ResourceList;

pub const NODE_NAME: &str = "node1";
pub const POD_NAMESPACE: &str = "test";

pub fn resource_list(entries: &[(&str, &str)]) -> ResourceList {
    return entries
        .iter()
        .map(|(k, v)| (k.to_string(), Quantity(v.to_string())))
        .collect::<BTreeMap<_, _>>();
}

pub fn test_node(name: &str, capacity: &[(&str, &str)], allocatable: &[(&str, &str)]) -> corev1::Node {
    let mut node = corev1::Node::default();
    node.metadata.name = Some(name.to_string());
    node.status = Some(corev1::NodeStatus {
        capacity: Some(resource_list(capacity)),
        allocatable: Some(resource_list(allocatable)),
        ..corev1::NodeStatus::default()
    });

    return node;
}

pub fn test_container(requests: &[(&str, &str)], limits: &[(&str, &str)]) -> corev1::Container {
    return corev1::Container {
        name: "main".to_string(),
        resources: Some(corev1::ResourceRequirements {
            requests: (!requests.is_empty()).then(|| resource_list(requests)),
            limits: (!limits.is_empty()).then(|| resource_list(limits)),
            ..corev1::ResourceRequirements::default()
        }),
        ..corev1::Container::default()
    };
}

pub fn test_pod(name: &str, phase: &str, containers: Vec<corev1::Container>) -> corev1::Pod {
    let mut pod = corev1::Pod::default();
    pod.metadata.namespace = Some(POD_NAMESPACE.to_string());
    pod.metadata.name = Some(name.to_string());
    pod.spec = Some(corev1::PodSpec {
        node_name: Some(NODE_NAME.to_string()),
        containers,
        ..corev1::PodSpec::default()
    });
    pod.status = Some(corev1::PodStatus {
        phase: Some(phase.to_string()),
        ..corev1::PodStatus::default()
    });

    return pod;
}

pub fn running_pod(name: &str, containers: Vec<corev1::Container>) -> corev1::Pod {
    return test_pod(name, "Running", containers);
}

pub fn api_error(code: u16, reason: &str) -> kube::Error {
    return kube::Error::Api(kube::error::ErrorResponse {
        status: "Failure".to_string(),
        message: format!("{} for test", reason),
        reason: reason.to_string(),
        code,
    });
}
