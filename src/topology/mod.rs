//! Topology generators and the step arithmetic they build on.

pub mod grid;
pub mod ring;
pub mod swing;

use std::fmt;

use serde::Serialize;

pub use grid::{honeycomb, rec_torus};
pub use ring::supertorus;
pub use swing::{distance, target};

use crate::graph::GraphSummary;
use crate::types::{TopoError, TopoResult};

/// The family of a generated topology, without dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopologyKind {
    Supertorus,
    Honeycomb,
    RecTorus,
}

impl TopologyKind {
    /// Parse a kind from its CLI name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "supertorus" => Some(Self::Supertorus),
            "honeycomb" => Some(Self::Honeycomb),
            "rec_torus" | "rec-torus" | "rectorus" => Some(Self::RecTorus),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Supertorus => "supertorus",
            Self::Honeycomb => "honeycomb",
            Self::RecTorus => "rec_torus",
        }
    }

    /// Attach dimensions: `(n, k)` for a supertorus, `(b, h)` for the grids.
    pub fn with_dimensions(self, first: usize, second: usize) -> TopoResult<Topology> {
        Ok(match self {
            Self::Supertorus => Topology::Supertorus {
                n: first,
                k: u32::try_from(second)
                    .map_err(|_| TopoError::invalid("k", format!("{} steps is too many", second)))?,
            },
            Self::Honeycomb => Topology::Honeycomb {
                b: first,
                h: second,
            },
            Self::RecTorus => Topology::RecTorus {
                b: first,
                h: second,
            },
        })
    }
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A fully specified topology that can be built on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Topology {
    Supertorus { n: usize, k: u32 },
    Honeycomb { b: usize, h: usize },
    RecTorus { b: usize, h: usize },
}

impl Topology {
    pub fn kind(&self) -> TopologyKind {
        match self {
            Self::Supertorus { .. } => TopologyKind::Supertorus,
            Self::Honeycomb { .. } => TopologyKind::Honeycomb,
            Self::RecTorus { .. } => TopologyKind::RecTorus,
        }
    }

    /// Build the graph and summarize it.
    pub fn summary(&self) -> TopoResult<GraphSummary> {
        Ok(match *self {
            Self::Supertorus { n, k } => supertorus(n, k)?.summary(),
            Self::Honeycomb { b, h } => honeycomb(b, h)?.summary(),
            Self::RecTorus { b, h } => rec_torus(b, h)?.summary(),
        })
    }

    /// Build the graph and render its nodes and edges as JSON.
    pub fn to_json(&self, pretty: bool) -> TopoResult<String> {
        let label = self.to_string();
        let json = match *self {
            Self::Supertorus { n, k } => {
                let graph = supertorus(n, k)?;
                render(&graph.export(&label), pretty)?
            }
            Self::Honeycomb { b, h } => {
                let graph = honeycomb(b, h)?;
                render(&graph.export(&label), pretty)?
            }
            Self::RecTorus { b, h } => {
                let graph = rec_torus(b, h)?;
                render(&graph.export(&label), pretty)?
            }
        };
        Ok(json)
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Supertorus { n, k } => write!(f, "supertorus({}, {})", n, k),
            Self::Honeycomb { b, h } => write!(f, "honeycomb({}, {})", b, h),
            Self::RecTorus { b, h } => write!(f, "rec_torus({}, {})", b, h),
        }
    }
}

fn render<S: Serialize>(value: &S, pretty: bool) -> TopoResult<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}
