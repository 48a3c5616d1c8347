//! Degree and queue-occupancy statistics, and a serializable edge listing.

use std::hash::Hash;

use serde::Serialize;

use super::Graph;

/// Snapshot of a graph's shape and queue backlog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
    /// Smallest neighbor count over all nodes (0 for an empty graph).
    pub min_degree: usize,
    /// Largest neighbor count over all nodes (0 for an empty graph).
    pub max_degree: usize,
    /// Directional queues, two per non-loop edge.
    pub queues: usize,
    pub longest_queue: usize,
    /// `None` when the graph has no queues.
    pub shortest_queue: Option<usize>,
    pub total_queued: usize,
}

/// Nodes and edges of a graph in insertion order, ready for JSON output.
#[derive(Debug, Serialize)]
pub struct GraphExport<'a, N> {
    pub topology: &'a str,
    pub nodes: &'a [N],
    pub edges: &'a [(N, N)],
}

impl<N, T> Graph<N, T>
where
    N: Eq + Hash + Clone,
{
    /// Compute a [`GraphSummary`].
    pub fn summary(&self) -> GraphSummary {
        let degrees = self.nodes().iter().map(|node| self.degree(node));
        let (min_degree, max_degree) = degrees
            .fold(None, |acc: Option<(usize, usize)>, d| match acc {
                None => Some((d, d)),
                Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
            })
            .unwrap_or((0, 0));

        GraphSummary {
            nodes: self.node_count(),
            edges: self.edge_count(),
            min_degree,
            max_degree,
            queues: self.queue_count(),
            longest_queue: self.longest_queue(),
            shortest_queue: self.shortest_queue(),
            total_queued: self.total_queued(),
        }
    }

    /// Borrow nodes and edges as a serializable listing labelled `topology`.
    pub fn export<'a>(&'a self, topology: &'a str) -> GraphExport<'a, N> {
        GraphExport {
            topology,
            nodes: self.nodes(),
            edges: self.edges(),
        }
    }
}
