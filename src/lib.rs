//! swing-topology — small interconnection-network topologies with per-link queues.
//!
//! Builds undirected graphs (supertorus rings, honeycomb and rectangular tori)
//! whose every link carries one FIFO queue per direction, and reports how full
//! those queues are. Message routing itself is left to the caller.

pub mod cli;
pub mod graph;
pub mod topology;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, GraphExport, GraphSummary};
pub use topology::{
    distance, honeycomb, rec_torus, supertorus, target, Topology, TopologyKind,
};
pub use types::{GridNode, Queue, RingNode, TopoError, TopoResult, MAX_STEP};
