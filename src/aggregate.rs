use k8s_openapi::api::core::v1 as corev1;

use crate::error::ReportResult;
use crate::quantity::Amount;
use crate::resources::Resources;
use crate::util::{
    full_name,
    total_pod_resources,
};

/// Node-level `(requests, limits)` totals for the active pods on one node.
///
/// The cpu, memory, and ephemeral storage columns are exact sums over every
/// container. `pods` in both totals is the number of pods passed in,
/// regardless of how many containers each declares.
pub fn allocated_resources(pods: &[corev1::Pod]) -> ReportResult<(Resources, Resources)> {
    let mut allocated_requests = Resources::default();
    let mut allocated_limits = Resources::default();

    for p in pods {
        let (requests, limits) = total_pod_resources(p)?;
        let owner = full_name(p);
        allocated_requests.add(&requests, &owner)?;
        allocated_limits.add(&limits, &owner)?;
    }

    let pod_count = Amount::from_count(pods.len());
    allocated_requests.pods = pod_count;
    allocated_limits.pods = pod_count;

    return Ok((allocated_requests, allocated_limits));
}
