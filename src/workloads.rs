use futures::stream::{
    self,
    Stream,
    TryStreamExt,
};
use k8s_openapi::api::core::v1 as corev1;
use kube::api::ListParams;
use tracing::*;

use crate::cluster::ClusterQuery;
use crate::error::{
    ReportError,
    ReportResult,
};
use crate::util::full_name;

const POD_KIND: &str = "pods";
const TERMINAL_PHASES: [&str; 2] = ["Succeeded", "Failed"];

enum Cursor {
    First,
    Continue(String),
    Exhausted,
}

/// Field selector matching the non-terminated pods scheduled to `node_name`.
pub fn active_pods_selector(node_name: &str) -> String {
    let mut selector = format!("spec.nodeName={}", node_name);
    for phase in TERMINAL_PHASES {
        selector.push_str(&format!(",status.phase!={}", phase));
    }
    return selector;
}

pub fn is_pod_terminated(pod: &corev1::Pod) -> bool {
    if let Some(corev1::PodStatus { phase: Some(phase), .. }) = &pod.status {
        return TERMINAL_PHASES.contains(&phase.as_str());
    }
    return false;
}

/// Lazily pages through the active pods on `node_name`, one list call per
/// yielded page. The stream ends once the server stops handing out continue tokens;
/// calling this again starts over from the first page.
///
/// A `chunk_size` of 0 sends no limit, leaving the page size to the server.
pub fn active_pod_pages<'a, C>(
    client: &'a C,
    node_name: &str,
    chunk_size: u32,
) -> impl Stream<Item = ReportResult<Vec<corev1::Pod>>> + 'a
where
    C: ClusterQuery + ?Sized,
{
    let selector = active_pods_selector(node_name);
    return stream::try_unfold(Cursor::First, move |cursor| {
        fetch_page(client, selector.clone(), chunk_size, cursor)
    });
}

async fn fetch_page<C>(
    client: &C,
    selector: String,
    chunk_size: u32,
    cursor: Cursor,
) -> ReportResult<Option<(Vec<corev1::Pod>, Cursor)>>
where
    C: ClusterQuery + ?Sized,
{
    let continue_token = match cursor {
        Cursor::Exhausted => return Ok(None),
        Cursor::First => None,
        Cursor::Continue(token) => Some(token),
    };

    let list_params = ListParams {
        field_selector: Some(selector),
        limit: (chunk_size > 0).then_some(chunk_size),
        continue_token,
        ..ListParams::default()
    };

    let result = client.list_pods(&list_params).await;
    let page = match result {
        Ok(page) => page,
        Err(source) => {
            return Err(ReportError::ListChunkFailed {
                kind: POD_KIND,
                field_selector: list_params.field_selector,
                limit: list_params.limit,
                continue_token: list_params.continue_token,
                source,
            })
        },
    };

    let next = match page.continue_token {
        Some(token) if !token.is_empty() => Cursor::Continue(token),
        _ => Cursor::Exhausted,
    };

    let pods: Vec<_> = page
        .items
        .into_iter()
        .filter(|pod| {
            let terminated = is_pod_terminated(pod);
            if terminated {
                warn!("server returned terminated pod {} despite field selector", full_name(pod));
            }
            !terminated
        })
        .collect();
    debug!("fetched page of {} pods ({:?})", pods.len(), list_params.field_selector);

    return Ok(Some((pods, next)));
}

/// Collects every active pod on `node_name` across all pages. A failed page
/// discards whatever was accumulated before it.
pub async fn fetch_active_pods<C>(client: &C, node_name: &str, chunk_size: u32) -> ReportResult<Vec<corev1::Pod>>
where
    C: ClusterQuery + ?Sized,
{
    let pods: Vec<corev1::Pod> = active_pod_pages(client, node_name, chunk_size).try_concat().await?;
    debug!("node {} has {} active pods", node_name, pods.len());
    return Ok(pods);
}
