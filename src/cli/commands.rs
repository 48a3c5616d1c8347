//! CLI command implementations.

use std::path::Path;

use log::info;

use crate::graph::GraphSummary;
use crate::topology::{distance, target, Topology};
use crate::types::TopoResult;

/// Print the swing distance at a step.
pub fn cmd_distance(step: u32, json: bool) -> TopoResult<()> {
    let d = distance(step)?;
    if json {
        println!("{}", serde_json::json!({"step": step, "distance": d}));
    } else {
        println!("distance({}) = {}", step, d);
    }
    Ok(())
}

/// Print the partner of a node at a step on a ring.
pub fn cmd_target(u: usize, step: u32, n: usize, json: bool) -> TopoResult<()> {
    let t = target(u, step, n)?;
    if json {
        println!(
            "{}",
            serde_json::json!({"node": u, "step": step, "ring": n, "target": t})
        );
    } else {
        println!("target({}, {}, {}) = {}", u, step, n, t);
    }
    Ok(())
}

/// Build a topology and print its summary.
pub fn cmd_build(topology: Topology, json: bool) -> TopoResult<()> {
    let summary = topology.summary()?;

    if json {
        let info = serde_json::json!({
            "topology": topology,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print_summary(&topology, &summary);
    }
    Ok(())
}

/// Write the nodes and edges of a topology as JSON, to a file or stdout.
pub fn cmd_export(topology: Topology, output: Option<&Path>, pretty: bool) -> TopoResult<()> {
    let json = topology.to_json(pretty)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!("exported {} to {}", topology, path.display());
            eprintln!("Exported {} to {}", topology, path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn print_summary(topology: &Topology, summary: &GraphSummary) {
    println!("Topology: {}", topology);
    println!("Nodes: {}", summary.nodes);
    println!("Edges: {}", summary.edges);
    println!("Degree: {}..{}", summary.min_degree, summary.max_degree);
    println!("Queues: {}", summary.queues);
    println!("Longest queue: {}", summary.longest_queue);
    match summary.shortest_queue {
        Some(len) => println!("Shortest queue: {}", len),
        None => println!("Shortest queue: none (no links)"),
    }
    println!("Queued items: {}", summary.total_queued);
}
