//! Greedy nearest-neighbor collection route.
//!
//! Starting at the base station, the route repeatedly moves to the closest
//! node not yet visited. Among equally close nodes the one generated first
//! wins, so the tour depends on generation order when distances tie.
//!
//! Each step scans all remaining nodes (O(n²) overall), which is fine for
//! the few tens of nodes a run places.

use super::geometry::nearest;
use super::types::{Node, Point, Route};

/// Build the visiting order from `start` through every node exactly once.
pub fn build_route(nodes: &[Node], start: Point) -> Route {
    let mut remaining: Vec<Node> = nodes.to_vec();
    let mut waypoints = Vec::with_capacity(nodes.len() + 1);
    let mut visit_order = Vec::with_capacity(nodes.len());
    waypoints.push(start);
    let mut current = start;

    while let Some(pos) = nearest(&current, remaining.iter().map(|n| &n.position)) {
        // Vec::remove keeps the remaining nodes in generation order for the tie-break.
        let next = remaining.remove(pos);
        waypoints.push(next.position);
        visit_order.push(next.index);
        current = next.position;
    }

    log::debug!("Route visits {} nodes: {:?}", visit_order.len(), visit_order);
    Route { waypoints, visit_order }
}
