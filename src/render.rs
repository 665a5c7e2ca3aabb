//! Plain-text rendering of a node resource report.

use std::io::{
    self,
    Write,
};

use tabled::settings::Style;
use tabled::{
    Table,
    Tabled,
};

use crate::nodes::NodeResources;
use crate::resources::Resources;
use crate::utilization::percent;

#[derive(Tabled)]
struct TotalsRow<'a> {
    #[tabled(rename = "NODE")]
    node: &'a str,
    #[tabled(rename = "CPU")]
    cpu: String,
    #[tabled(rename = "Memory")]
    memory: String,
    #[tabled(rename = "Ephemeral Storage")]
    ephemeral_storage: String,
    #[tabled(rename = "Pods")]
    pods: String,
}

#[derive(Tabled)]
struct AllocatedRow<'a> {
    #[tabled(rename = "NODE")]
    node: &'a str,
    #[tabled(rename = "CPU")]
    cpu: String,
    #[tabled(rename = "CPU Percent")]
    cpu_percent: String,
    #[tabled(rename = "Memory")]
    memory: String,
    #[tabled(rename = "Mem Percent")]
    memory_percent: String,
    #[tabled(rename = "Ephemeral Storage")]
    ephemeral_storage: String,
    #[tabled(rename = "Storage Percent")]
    ephemeral_storage_percent: String,
    #[tabled(rename = "Pods")]
    pods: String,
    #[tabled(rename = "Pods Percent")]
    pods_percent: String,
}

impl<'a> TotalsRow<'a> {
    fn new(node: &'a str, totals: &Resources) -> TotalsRow<'a> {
        return TotalsRow {
            node,
            cpu: totals.cpu.to_string(),
            memory: totals.memory.to_string(),
            ephemeral_storage: totals.ephemeral_storage.to_string(),
            pods: totals.pods.to_string(),
        };
    }
}

impl<'a> AllocatedRow<'a> {
    fn new(node: &'a str, allocated: &Resources, allocatable: &Resources) -> AllocatedRow<'a> {
        return AllocatedRow {
            node,
            cpu: allocated.cpu.to_string(),
            cpu_percent: percent(&allocated.cpu, &allocatable.cpu),
            memory: allocated.memory.to_string(),
            memory_percent: percent(&allocated.memory, &allocatable.memory),
            ephemeral_storage: allocated.ephemeral_storage.to_string(),
            ephemeral_storage_percent: percent(&allocated.ephemeral_storage, &allocatable.ephemeral_storage),
            pods: allocated.pods.to_string(),
            pods_percent: percent(&allocated.pods, &allocatable.pods),
        };
    }
}

/// Writes the Capacity, Allocatable, Allocated Requests, and Allocated Limits
/// tables, one row per node in the order given.
pub fn render_report<W: Write>(nodes: &[NodeResources], out: &mut W) -> io::Result<()> {
    let capacity = Table::new(nodes.iter().map(|n| TotalsRow::new(&n.name, &n.capacity)));
    write_section(out, "Nodes Capacity", capacity)?;

    let allocatable = Table::new(nodes.iter().map(|n| TotalsRow::new(&n.name, &n.allocatable)));
    write_section(out, "Nodes Allocatable", allocatable)?;

    let requests =
        Table::new(nodes.iter().map(|n| AllocatedRow::new(&n.name, &n.allocated_requests, &n.allocatable)));
    write_section(out, "Nodes Allocated Requests", requests)?;

    let limits = Table::new(nodes.iter().map(|n| AllocatedRow::new(&n.name, &n.allocated_limits, &n.allocatable)));
    write_section(out, "Nodes Allocated Limits", limits)?;

    return out.flush();
}

fn write_section<W: Write>(out: &mut W, title: &str, mut table: Table) -> io::Result<()> {
    table.with(Style::rounded());
    return write!(out, "\n{}:\n{}\n", title, table);
}

#[cfg(test)]
mod test;
