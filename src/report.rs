//! Plain-text rendering of a result bundle.
//!
//! Values are rounded for display only (distance to 2 decimals, delay to 6,
//! energy to 3); the bundle itself keeps full precision.

use std::fmt::Write;

use crate::simulation::{Cluster, ResultBundle};

/// Markdown-style per-node metrics table, nodes numbered from 1.
pub fn metrics_table(bundle: &ResultBundle) -> String {
    let mut out = String::new();
    out.push_str("| Node | Distance (m) | Delay (sec) | Energy Units |\n");
    out.push_str("|------|--------------|-------------|--------------|\n");
    for metric in &bundle.link_metrics {
        let _ = writeln!(out, "| {} | {:.2} | {:.6} | {:.3} |", metric.node_index + 1, metric.distance, metric.delay, metric.energy);
    }
    out
}

pub fn aggregates_summary(bundle: &ResultBundle) -> String {
    let totals = &bundle.aggregates;
    format!(
        "Total Delay: {:.6} sec\nTotal Energy: {:.3} units\nSynchronization Overhead: {:.6} sec\n",
        totals.total_delay, totals.total_energy, totals.total_sync_overhead
    )
}

fn cluster_line(i: usize, cluster: &Cluster) -> String {
    let members: Vec<String> = cluster.members.iter().map(|n| (n.index + 1).to_string()).collect();
    format!(
        "Cluster {}: center node {} at ({}, {}), members [{}]",
        i + 1,
        cluster.center.index + 1,
        cluster.center.position.x,
        cluster.center.position.y,
        members.join(", ")
    )
}

/// Full report: layout, route, clusters, metrics table, totals and the
/// transport notes.
pub fn render(bundle: &ResultBundle) -> String {
    let config = &bundle.configuration;
    let mut out = String::new();

    let _ = writeln!(out, "Marine Sensor Network: {} nodes, {} m area, {} transport", config.node_count, config.area_size, config.transport_type);
    let _ = writeln!(out, "Base station at ({}, {})", bundle.base_station.x, bundle.base_station.y);
    if config.sofar_active() {
        out.push_str("SOFAR channel effect enabled\n");
    }

    let order: Vec<String> = bundle.route.visit_order.iter().map(|i| (i + 1).to_string()).collect();
    let _ = writeln!(out, "Route: BS -> {} ({:.2} m)", order.join(" -> "), bundle.route.total_length());

    if !bundle.clusters.is_empty() {
        for (i, cluster) in bundle.clusters.iter().enumerate() {
            out.push_str(&cluster_line(i, cluster));
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(&metrics_table(bundle));
    out.push('\n');
    out.push_str(&aggregates_summary(bundle));

    out.push_str("\nInterpretation:\n");
    for note in config.transport_type.characteristics() {
        let _ = writeln!(out, "- {}", note);
    }
    if config.clustering_enabled {
        out.push_str("Clustering reduces communication hops and saves energy.\n");
    }
    out
}
