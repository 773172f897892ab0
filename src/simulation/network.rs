//! Single-run orchestration of the sensor network pipeline.
//!
//! High-level flow of one run:
//! 1) Validate the configuration and place nodes plus the base station.
//! 2) Optionally partition the nodes into clusters.
//! 3) Build the greedy collection route from the base station.
//! 4) Cost every node's direct link to the base station and sum the totals.
//!
//! Link costs never follow the route or the cluster hierarchy; both are
//! produced for display only.

use super::clustering::assign_clusters;
use super::error::ConfigurationError;
use super::link_model::link_metric;
use super::node_generator::{NODE_MARGIN, base_station, generate_nodes};
use super::routing::build_route;
use super::types::{AggregateResult, Configuration, LinkMetric, ResultBundle};

/// Node counts the model is tuned for. Values outside still run.
pub const TYPICAL_NODE_COUNT: (usize, usize) = (4, 20);

/// Area sizes (m) the model is tuned for. Values outside still run.
pub const TYPICAL_AREA_SIZE: (f64, f64) = (200.0, 3000.0);

/// Validate a configuration before running it.
///
/// Rejects configurations that cannot be generated:
/// - No nodes
/// - Area too small to leave the placement margin, or not finite
///
/// Unusual but workable values (outside the typical ranges, or SOFAR requested
/// for a non-acoustic transport) are only logged as warnings.
pub fn validate_configuration(config: &Configuration) -> Result<(), ConfigurationError> {
    if config.node_count < 1 {
        return Err(ConfigurationError::NoNodes);
    }
    if !config.area_size.is_finite() || config.area_size <= 2.0 * NODE_MARGIN {
        return Err(ConfigurationError::AreaTooSmall { area_size: config.area_size });
    }

    let (min_nodes, max_nodes) = TYPICAL_NODE_COUNT;
    if config.node_count < min_nodes || config.node_count > max_nodes {
        log::warn!("node_count {} is outside the typical range {}-{}", config.node_count, min_nodes, max_nodes);
    }
    let (min_area, max_area) = TYPICAL_AREA_SIZE;
    if config.area_size < min_area || config.area_size > max_area {
        log::warn!("area_size {} m is outside the typical range {}-{} m", config.area_size, min_area, max_area);
    }
    if config.sofar_enabled && !config.sofar_active() {
        log::warn!("SOFAR channel effect requested for {} transport, ignoring", config.transport_type);
    }
    Ok(())
}

/// Sum per-node metrics. Sync overhead is a fixed charge per node.
pub fn aggregate(metrics: &[LinkMetric], sync_overhead_per_node: f64) -> AggregateResult {
    AggregateResult {
        total_energy: metrics.iter().map(|m| m.energy).sum(),
        total_delay: metrics.iter().map(|m| m.delay).sum(),
        total_sync_overhead: sync_overhead_per_node * metrics.len() as f64,
    }
}

/// Run the whole pipeline for one configuration.
///
/// Deterministic: the same configuration always yields the same bundle. The
/// only failure is an invalid configuration, in which case nothing is
/// computed.
pub fn run_simulation(config: &Configuration) -> Result<ResultBundle, ConfigurationError> {
    validate_configuration(config)?;
    log::info!(
        "Running {} nodes in {} m area, transport {}, clustering {}, SOFAR {}, seed {}",
        config.node_count,
        config.area_size,
        config.transport_type,
        config.clustering_enabled,
        config.sofar_active(),
        config.random_seed
    );

    let nodes = generate_nodes(config.node_count, config.area_size, config.random_seed)?;
    let base_station = base_station(config.area_size);

    let clusters = if config.clustering_enabled { assign_clusters(&nodes) } else { Vec::new() };
    let route = build_route(&nodes, base_station);

    let sofar = config.sofar_active();
    let link_metrics: Vec<LinkMetric> = nodes
        .iter()
        .map(|node| link_metric(node, &base_station, config.transport_type, sofar))
        .collect();
    let aggregates = aggregate(&link_metrics, config.transport_type.profile().sync_overhead);

    log::info!(
        "Total delay {:.6} s, total energy {:.3} units, sync overhead {:.6} s",
        aggregates.total_delay,
        aggregates.total_energy,
        aggregates.total_sync_overhead
    );

    Ok(ResultBundle {
        configuration: config.clone(),
        nodes,
        base_station,
        clusters,
        route,
        link_metrics,
        aggregates,
    })
}
