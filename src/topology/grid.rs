//! Toroidal grid topologies over a `b × h` rectangle.

use log::debug;

use crate::graph::Graph;
use crate::types::{GridNode, TopoError, TopoResult};

fn check_dimensions(b: usize, h: usize) -> TopoResult<()> {
    if b == 0 {
        return Err(TopoError::invalid("b", "grid width must be at least 1"));
    }
    if h == 0 {
        return Err(TopoError::invalid("h", "grid height must be at least 1"));
    }
    Ok(())
}

fn grid_nodes(b: usize, h: usize) -> Graph<GridNode> {
    let mut graph = Graph::new();
    graph.add_nodes((0..b).flat_map(|i| (0..h).map(move |j| (i, j))));
    graph
}

/// Hexagonal torus: horizontal links both ways, one vertical link per node.
///
/// Nodes whose coordinates share parity link upward, the others downward,
/// which gives every node degree 3 when `b >= 3` and `h` is even.
pub fn honeycomb(b: usize, h: usize) -> TopoResult<Graph<GridNode>> {
    check_dimensions(b, h)?;

    let mut graph = grid_nodes(b, h);
    for i in 0..b {
        for j in 0..h {
            let here = (i, j);
            graph.add_edges([(here, ((i + 1) % b, j)), (here, ((i + b - 1) % b, j))]);
            let vertical = if i % 2 == j % 2 {
                (i, (j + 1) % h)
            } else {
                (i, (j + h - 1) % h)
            };
            graph.add_edge((here, vertical));
        }
    }

    debug!(
        "built honeycomb {}x{}: {} nodes, {} edges",
        b,
        h,
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Square-tessellation torus: each node links to its four axis neighbors.
pub fn rec_torus(b: usize, h: usize) -> TopoResult<Graph<GridNode>> {
    check_dimensions(b, h)?;

    let mut graph = grid_nodes(b, h);
    for x in 0..b {
        for y in 0..h {
            let here = (x, y);
            graph.add_edge((here, ((x + 1) % b, y)));
            graph.add_edge((here, ((x + b - 1) % b, y)));
            graph.add_edge((here, (x, (y + 1) % h)));
            graph.add_edge((here, (x, (y + h - 1) % h)));
        }
    }

    debug!(
        "built rec_torus {}x{}: {} nodes, {} edges",
        b,
        h,
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}
