//! Seeded placement of sensor nodes and the fixed base station.
//!
//! Coordinates are integers drawn uniformly from `[50, area_size - 50)` with a
//! `ChaCha8Rng` seeded from the configuration, x first then y for each node.
//! A given `(node_count, area_size, random_seed)` always yields the same nodes.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Uniform};

use super::error::ConfigurationError;
use super::types::{Node, Point};

/// Distance kept clear between generated nodes and the area edges.
pub const NODE_MARGIN: f64 = 50.0;

/// Fixed y offset of the base station from the surface edge.
pub const BASE_STATION_Y: f64 = 20.0;

/// Generate `node_count` nodes inside a square area of side `area_size`.
///
/// # Errors
///
/// [`ConfigurationError::NoNodes`] if `node_count` is 0 and
/// [`ConfigurationError::AreaTooSmall`] if `area_size` does not exceed twice the
/// margin (or is not finite).
pub fn generate_nodes(node_count: usize, area_size: f64, random_seed: u64) -> Result<Vec<Node>, ConfigurationError> {
    if node_count < 1 {
        return Err(ConfigurationError::NoNodes);
    }
    if !area_size.is_finite() || area_size <= 2.0 * NODE_MARGIN {
        return Err(ConfigurationError::AreaTooSmall { area_size });
    }

    // Exclusive upper bound; ceil keeps every draw strictly below area_size - margin.
    let low = NODE_MARGIN as i64;
    let high = (area_size - NODE_MARGIN).ceil() as i64;
    let coordinate = Uniform::new(low, high);
    let mut rng = ChaCha8Rng::seed_from_u64(random_seed);

    let nodes: Vec<Node> = (0..node_count)
        .map(|index| {
            let x = coordinate.sample(&mut rng) as f64;
            let y = coordinate.sample(&mut rng) as f64;
            Node {
                index,
                position: Point { x, y },
            }
        })
        .collect();

    log::debug!("Generated {} nodes in {} m area (seed {})", nodes.len(), area_size, random_seed);
    Ok(nodes)
}

/// Base station position: horizontally centered (truncated to whole meters)
/// at a fixed small depth.
pub fn base_station(area_size: f64) -> Point {
    Point {
        x: (area_size / 2.0).trunc(),
        y: BASE_STATION_Y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_nodes() {
        let a = generate_nodes(12, 1000.0, 3).unwrap();
        let b = generate_nodes(12, 1000.0, 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_changes_layout() {
        let a = generate_nodes(12, 1000.0, 3).unwrap();
        let b = generate_nodes(12, 1000.0, 4).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn coordinates_are_integral_and_inside_margin() {
        for area in [101.0, 200.0, 1000.0, 1200.5, 3000.0] {
            let nodes = generate_nodes(20, area, 7).unwrap();
            assert_eq!(nodes.len(), 20);
            for (i, node) in nodes.iter().enumerate() {
                assert_eq!(node.index, i);
                for c in [node.position.x, node.position.y] {
                    assert_eq!(c.fract(), 0.0);
                    assert!(c >= NODE_MARGIN, "{c} below margin for area {area}");
                    assert!(c < area - NODE_MARGIN, "{c} beyond margin for area {area}");
                }
            }
        }
    }

    #[test]
    fn rejects_empty_or_cramped_areas() {
        assert_eq!(generate_nodes(0, 1000.0, 1), Err(ConfigurationError::NoNodes));
        assert_eq!(generate_nodes(5, 100.0, 1), Err(ConfigurationError::AreaTooSmall { area_size: 100.0 }));
        assert!(matches!(generate_nodes(5, f64::NAN, 1), Err(ConfigurationError::AreaTooSmall { .. })));
        assert!(generate_nodes(5, 100.5, 1).is_ok());
    }

    #[test]
    fn base_station_is_centered_and_truncated() {
        assert_eq!(base_station(1000.0), Point::new(500.0, 20.0));
        assert_eq!(base_station(1201.0), Point::new(600.0, 20.0));
    }
}
