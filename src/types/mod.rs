//! Leaf data types for the swing-topology library.

pub mod error;
pub mod queue;

pub use error::{TopoError, TopoResult};
pub use queue::Queue;

/// Node identifier of ring-based topologies (supertorus).
pub type RingNode = usize;

/// Node identifier of grid-based topologies: `(column, row)`.
pub type GridNode = (usize, usize);

/// Largest swing step whose distance fits an `i64` exactly.
pub const MAX_STEP: u32 = 63;
