use rstest::*;

use super::*;
use crate::quantity::Amount;
use crate::utilization::PERCENT_UNDEFINED;

fn resources(cpu: &str, memory: &str, ephemeral_storage: &str, pods: &str) -> Resources {
    return Resources {
        cpu: Amount::try_from(cpu).unwrap(),
        memory: Amount::try_from(memory).unwrap(),
        ephemeral_storage: Amount::try_from(ephemeral_storage).unwrap(),
        pods: Amount::try_from(pods).unwrap(),
    };
}

#[fixture]
fn nodes() -> Vec<NodeResources> {
    return vec![
        NodeResources {
            name: "worker-2".to_string(),
            capacity: resources("8", "32Gi", "100Gi", "110"),
            allocatable: resources("4", "16Gi", "80Gi", "10"),
            allocated_requests: resources("2", "4Gi", "20Gi", "3"),
            allocated_limits: resources("6", "32Gi", "40Gi", "3"),
        },
        NodeResources {
            name: "worker-1".to_string(),
            capacity: resources("2", "8Gi", "50Gi", "110"),
            allocatable: resources("0", "0", "0", "0"),
            allocated_requests: Resources::default(),
            allocated_limits: Resources::default(),
        },
    ];
}

fn render(nodes: &[NodeResources]) -> String {
    let mut out = Vec::new();
    render_report(nodes, &mut out).unwrap();
    return String::from_utf8(out).unwrap();
}

fn section<'a>(output: &'a str, title: &str) -> &'a str {
    let start = output.find(title).unwrap();
    let rest = &output[start + title.len()..];
    return match rest.find("\nNodes ") {
        Some(end) => &rest[..end],
        None => rest,
    };
}

#[rstest]
fn test_render_report_section_order(nodes: Vec<NodeResources>) {
    let output = render(&nodes);

    let capacity = output.find("\nNodes Capacity:\n").unwrap();
    let allocatable = output.find("\nNodes Allocatable:\n").unwrap();
    let requests = output.find("\nNodes Allocated Requests:\n").unwrap();
    let limits = output.find("\nNodes Allocated Limits:\n").unwrap();
    assert!(capacity < allocatable && allocatable < requests && requests < limits);
}

#[rstest]
fn test_render_report_totals_headers(nodes: Vec<NodeResources>) {
    let output = render(&nodes);
    let capacity = section(&output, "Nodes Capacity:");

    let header = capacity.lines().find(|l| l.contains("NODE")).unwrap();
    let columns: Vec<_> = header.split('│').map(str::trim).filter(|c| !c.is_empty()).collect();
    assert_eq!(columns, vec!["NODE", "CPU", "Memory", "Ephemeral Storage", "Pods"]);
}

#[rstest]
fn test_render_report_allocated_headers(nodes: Vec<NodeResources>) {
    let output = render(&nodes);
    let requests = section(&output, "Nodes Allocated Requests:");

    let header = requests.lines().find(|l| l.contains("NODE")).unwrap();
    let columns: Vec<_> = header.split('│').map(str::trim).filter(|c| !c.is_empty()).collect();
    assert_eq!(
        columns,
        vec![
            "NODE",
            "CPU",
            "CPU Percent",
            "Memory",
            "Mem Percent",
            "Ephemeral Storage",
            "Storage Percent",
            "Pods",
            "Pods Percent",
        ]
    );
}

#[rstest]
fn test_render_report_rows_keep_node_order(nodes: Vec<NodeResources>) {
    let output = render(&nodes);

    for title in ["Nodes Capacity:", "Nodes Allocatable:", "Nodes Allocated Requests:", "Nodes Allocated Limits:"] {
        let table = section(&output, title);
        assert!(table.find("worker-2").unwrap() < table.find("worker-1").unwrap());
    }
}

#[rstest]
fn test_render_report_requests_percentages(nodes: Vec<NodeResources>) {
    let output = render(&nodes);
    let requests = section(&output, "Nodes Allocated Requests:");

    let row = requests.lines().find(|l| l.contains("worker-2")).unwrap();
    assert!(row.contains("50.00%"));
    assert!(row.contains("25.00%"));
    assert!(row.contains("30.00%"));
}

#[rstest]
fn test_render_report_overcommitted_limits_not_clamped(nodes: Vec<NodeResources>) {
    let output = render(&nodes);
    let limits = section(&output, "Nodes Allocated Limits:");

    let row = limits.lines().find(|l| l.contains("worker-2")).unwrap();
    assert!(row.contains("150.00%"));
    assert!(row.contains("200.00%"));
}

#[rstest]
fn test_render_report_zero_allocatable(nodes: Vec<NodeResources>) {
    let output = render(&nodes);
    let requests = section(&output, "Nodes Allocated Requests:");

    let row = requests.lines().find(|l| l.contains("worker-1")).unwrap();
    assert_eq!(row.matches(PERCENT_UNDEFINED).count(), 4);
}

#[rstest]
fn test_render_report_no_nodes() {
    let output = render(&[]);

    assert!(output.contains("Nodes Capacity:"));
    assert!(output.contains("Nodes Allocated Limits:"));
    assert!(!output.contains("worker"));
}
