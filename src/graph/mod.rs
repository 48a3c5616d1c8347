//! In-memory graph with per-link queues — the core data structure.

pub mod network;
pub mod summary;

pub use network::Graph;
pub use summary::{GraphExport, GraphSummary};
