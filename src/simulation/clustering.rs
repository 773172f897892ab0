//! One-pass cluster assignment around fixed centers.
//!
//! The first `k` generated nodes become cluster centers and are never moved.
//! Every node (centers included) joins the cluster with the nearest center;
//! equal distances go to the lower cluster index.

use super::geometry::nearest;
use super::types::{Cluster, Node};

/// Number of clusters for a run: `max(2, node_count / 4)`, capped at the
/// node count so a single node forms a single cluster.
pub fn cluster_count(node_count: usize) -> usize {
    (node_count / 4).max(2).min(node_count)
}

/// Partition `nodes` into [`cluster_count`] clusters.
///
/// Members keep generation order. An empty node slice yields no clusters.
pub fn assign_clusters(nodes: &[Node]) -> Vec<Cluster> {
    let k = cluster_count(nodes.len());
    let mut clusters: Vec<Cluster> = nodes[..k]
        .iter()
        .map(|center| Cluster {
            center: *center,
            members: Vec::new(),
        })
        .collect();

    for node in nodes {
        let centers = clusters.iter().map(|c| &c.center.position);
        if let Some(cluster_index) = nearest(&node.position, centers) {
            clusters[cluster_index].members.push(*node);
        }
    }

    for (i, cluster) in clusters.iter().enumerate() {
        log::debug!("Cluster {} centered on node {} with {} members", i, cluster.center.index, cluster.members.len());
    }
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::types::Point;

    fn nodes(coords: &[(f64, f64)]) -> Vec<Node> {
        coords
            .iter()
            .enumerate()
            .map(|(index, &(x, y))| Node {
                index,
                position: Point { x, y },
            })
            .collect()
    }

    #[test]
    fn cluster_count_follows_node_count() {
        assert_eq!(cluster_count(1), 1);
        assert_eq!(cluster_count(2), 2);
        assert_eq!(cluster_count(7), 2);
        assert_eq!(cluster_count(12), 3);
        assert_eq!(cluster_count(20), 5);
    }

    #[test]
    fn single_node_is_its_own_cluster() {
        let ns = nodes(&[(100.0, 100.0)]);
        let clusters = assign_clusters(&ns);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].center, ns[0]);
        assert_eq!(clusters[0].members, ns);
    }

    #[test]
    fn assigns_to_nearest_center_with_low_index_tie_break() {
        // Centers are nodes 0 and 1; node 2 sits exactly between them.
        let ns = nodes(&[(0.0, 0.0), (100.0, 0.0), (50.0, 0.0), (90.0, 5.0), (10.0, 5.0)]);
        let clusters = assign_clusters(&ns);
        assert_eq!(clusters.len(), 2);
        let members: Vec<Vec<usize>> = clusters.iter().map(|c| c.members.iter().map(|n| n.index).collect()).collect();
        assert_eq!(members, vec![vec![0, 2, 4], vec![1, 3]]);
    }

    #[test]
    fn centers_belong_to_their_own_cluster() {
        let ns = nodes(&[(60.0, 60.0), (900.0, 900.0), (400.0, 420.0), (880.0, 60.0), (70.0, 800.0), (500.0, 500.0), (61.0, 61.0), (899.0, 899.0)]);
        let clusters = assign_clusters(&ns);
        for cluster in &clusters {
            assert!(cluster.members.contains(&cluster.center));
        }
        let total: usize = clusters.iter().map(|c| c.members.len()).sum();
        assert_eq!(total, ns.len());
    }

    #[test]
    fn no_nodes_no_clusters() {
        assert!(assign_clusters(&[]).is_empty());
    }
}
