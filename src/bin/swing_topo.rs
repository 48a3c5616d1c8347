//! CLI entry point for the `swing-topo` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use swing_topology::cli::commands;
use swing_topology::{Topology, TopoError, TopologyKind};

#[derive(Parser)]
#[command(
    name = "swing-topo",
    about = "Build and inspect supertorus, honeycomb, and torus topologies"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Signed swing distance at a step
    Distance {
        /// Algorithm step (0-based)
        step: u32,
    },
    /// Partner of a node at a step on a ring
    Target {
        /// Starting node
        u: usize,
        /// Algorithm step (0-based)
        step: u32,
        /// Ring size
        n: usize,
    },
    /// Ring of N nodes with the links of the first K swing steps
    Supertorus {
        /// Number of nodes
        n: usize,
        /// Number of guaranteed steps
        k: u32,
    },
    /// Hexagonal torus inscribed in a B x H rectangle
    Honeycomb {
        /// Rectangle width
        b: usize,
        /// Rectangle height
        h: usize,
    },
    /// Square torus of B x H nodes
    RecTorus {
        /// Rectangle width
        b: usize,
        /// Rectangle height
        h: usize,
    },
    /// Export a topology's nodes and edges as JSON
    Export {
        /// Topology: supertorus, honeycomb, rec-torus
        topology: String,
        /// First dimension (n or b)
        first: usize,
        /// Second dimension (k or h)
        second: usize,
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Distance { step } => commands::cmd_distance(step, json),
        Commands::Target { u, step, n } => commands::cmd_target(u, step, n, json),
        Commands::Supertorus { n, k } => commands::cmd_build(Topology::Supertorus { n, k }, json),
        Commands::Honeycomb { b, h } => commands::cmd_build(Topology::Honeycomb { b, h }, json),
        Commands::RecTorus { b, h } => commands::cmd_build(Topology::RecTorus { b, h }, json),
        Commands::Export {
            topology,
            first,
            second,
            output,
            pretty,
        } => {
            let kind = match TopologyKind::from_name(&topology) {
                Some(kind) => kind,
                None => {
                    eprintln!("Unknown topology: {}", topology);
                    process::exit(3);
                }
            };
            kind.with_dimensions(first, second)
                .and_then(|t| commands::cmd_export(t, output.as_deref(), pretty))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            TopoError::Io(_) | TopoError::Json(_) => 1,
            TopoError::InvalidArgument { .. } | TopoError::StepOutOfRange { .. } => 2,
            TopoError::EmptyQueue => 4,
        };
        process::exit(code);
    }
}
