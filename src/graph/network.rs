//! Core graph structure — nodes, undirected edges, and one queue per link direction.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use log::trace;

use crate::types::Queue;

/// An undirected graph whose links carry one message queue per direction.
///
/// `N` is the node identifier and `T` the queued payload. Payloads default to
/// node identifiers, which is what a router enqueues (the final destination).
#[derive(Debug, Clone)]
pub struct Graph<N, T = N> {
    /// Nodes in insertion order, without duplicates.
    nodes: Vec<N>,
    /// Symmetric adjacency: `v ∈ neighbor[u]` iff `u ∈ neighbor[v]`.
    neighbor: HashMap<N, HashSet<N>>,
    /// One queue for each direction of every edge.
    queue: HashMap<(N, N), Queue<T>>,
    /// Edges in insertion order, each stored once in the direction it was added.
    edges: Vec<(N, N)>,
}

impl<N, T> Graph<N, T>
where
    N: Eq + Hash + Clone,
{
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            neighbor: HashMap::new(),
            queue: HashMap::new(),
            edges: Vec::new(),
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// All edges, in insertion order and in the direction first given.
    pub fn edges(&self) -> &[(N, N)] {
        &self.edges
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.neighbor.contains_key(node)
    }

    /// True if `{u, v}` is an edge, whichever direction it was added in.
    pub fn contains_edge(&self, u: &N, v: &N) -> bool {
        // Both directions always have a queue, so one lookup suffices.
        self.queue.contains_key(&(u.clone(), v.clone()))
    }

    /// Neighbors of `node`, or `None` if the node is absent.
    pub fn neighbors(&self, node: &N) -> Option<&HashSet<N>> {
        self.neighbor.get(node)
    }

    /// Number of distinct neighbors of `node` (0 if absent).
    pub fn degree(&self, node: &N) -> usize {
        self.neighbor.get(node).map_or(0, HashSet::len)
    }

    /// The queue carrying traffic from `u` towards `v`.
    pub fn queue(&self, u: &N, v: &N) -> Option<&Queue<T>> {
        self.queue.get(&(u.clone(), v.clone()))
    }

    /// Mutable access to the queue carrying traffic from `u` towards `v`.
    pub fn queue_mut(&mut self, u: &N, v: &N) -> Option<&mut Queue<T>> {
        self.queue.get_mut(&(u.clone(), v.clone()))
    }

    /// Number of directional queues.
    pub fn queue_count(&self) -> usize {
        self.queue.len()
    }

    /// Add a node. Returns `false` if it was already present.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.neighbor.contains_key(&node) {
            return false;
        }
        self.neighbor.insert(node.clone(), HashSet::new());
        self.nodes.push(node);
        true
    }

    /// Add each node in order.
    pub fn add_nodes<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = N>,
    {
        for node in nodes {
            self.add_node(node);
        }
    }

    /// Add the undirected edge `{u, v}`, creating missing endpoints.
    ///
    /// Returns `false` (and changes nothing) if the edge already exists in
    /// either direction. Self-loops are accepted and own a single queue.
    pub fn add_edge(&mut self, edge: (N, N)) -> bool {
        let (u, v) = edge;
        if self.contains_edge(&u, &v) {
            trace!("edge already present, skipping");
            return false;
        }

        self.add_node(u.clone());
        self.add_node(v.clone());

        self.queue.insert((u.clone(), v.clone()), Queue::new());
        self.queue.insert((v.clone(), u.clone()), Queue::new());

        if let Some(adjacent) = self.neighbor.get_mut(&u) {
            adjacent.insert(v.clone());
        }
        if let Some(adjacent) = self.neighbor.get_mut(&v) {
            adjacent.insert(u.clone());
        }

        self.edges.push((u, v));
        true
    }

    /// Add each edge in order.
    pub fn add_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (N, N)>,
    {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    /// Length of the longest directional queue (0 when there are none).
    pub fn longest_queue(&self) -> usize {
        self.queue.values().map(Queue::len).max().unwrap_or(0)
    }

    /// Length of the shortest directional queue.
    ///
    /// Returns `None` when the graph has no edges, hence no queues.
    pub fn shortest_queue(&self) -> Option<usize> {
        self.queue.values().map(Queue::len).min()
    }

    /// True when every queue is empty.
    pub fn all_queues_empty(&self) -> bool {
        self.longest_queue() == 0
    }

    /// Total number of items across all queues.
    pub fn total_queued(&self) -> usize {
        self.queue.values().map(Queue::len).sum()
    }
}

impl<N, T> Default for Graph<N, T>
where
    N: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the adjacency mapping, nodes in insertion order.
impl<N, T> fmt::Display for Graph<N, T>
where
    N: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for node in &self.nodes {
            if let Some(adjacent) = self.neighbor.get(node) {
                map.entry(node, adjacent);
            }
        }
        map.finish()
    }
}
