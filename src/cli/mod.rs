//! Command implementations behind the `swing-topo` binary.

pub mod commands;
