use k8s_openapi::api::core::v1 as corev1;
use kube::api::{
    Resource,
    ResourceExt,
};

use crate::error::ReportResult;
use crate::resources::Resources;

pub fn full_name(obj: &impl Resource) -> String {
    return match obj.namespace() {
        Some(ns) => format!("{}/{}", ns, obj.name_any()),
        None => obj.name_any().clone(),
    };
}

/// Sums the requests and limits declared by every container in `pod`.
/// Absent declarations count as zero; the pod tally stays zero.
pub fn total_pod_resources(pod: &corev1::Pod) -> ReportResult<(Resources, Resources)> {
    let mut requests = Resources::default();
    let mut limits = Resources::default();

    if let Some(spec) = &pod.spec {
        let owner = full_name(pod);
        for c in &spec.containers {
            if let Some(corev1::ResourceRequirements { requests: declared_requests, limits: declared_limits, .. }) =
                &c.resources
            {
                if let Some(declared) = declared_requests {
                    requests.add_declared(declared, &owner)?;
                }
                if let Some(declared) = declared_limits {
                    limits.add_declared(declared, &owner)?;
                }
            }
        }
    }

    return Ok((requests, limits));
}
