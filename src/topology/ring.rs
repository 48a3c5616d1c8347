//! Ring-based topologies.

use log::debug;

use crate::graph::Graph;
use crate::types::{RingNode, TopoError, TopoResult};

use super::swing::{distance, wrap};

/// Ring of `n` nodes with the links of the first `k` swing steps.
///
/// At each step `s < k`, every even node `u` is linked to `u + distance(s)`
/// (mod `n`); odd nodes appear only as the other endpoint. Those links let
/// every pair of the first `k` steps communicate over a private edge.
/// `k = 2` yields the plain 1D torus, `k = 0` a ring with no links.
pub fn supertorus(n: usize, k: u32) -> TopoResult<Graph<RingNode>> {
    if n == 0 {
        return Err(TopoError::invalid("n", "ring must have at least one node"));
    }

    let mut graph = Graph::new();
    graph.add_nodes(0..n);
    for step in 0..k {
        let d = i128::from(distance(step)?);
        for node in (0..n).step_by(2) {
            graph.add_edge((node, wrap(node as i128 + d, n)));
        }
    }

    debug!(
        "built supertorus n={} k={}: {} nodes, {} edges",
        n,
        k,
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}
