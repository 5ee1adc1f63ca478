//! Configuration for keeperctl

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// keeperctl - Keeper witness registry host
#[derive(Parser, Debug, Clone)]
#[command(name = "keeperctl")]
#[command(about = "Host the keeper witness registry over a local ledger")]
pub struct Config {
    /// Data directory for persistent storage
    #[arg(short, long, default_value = "./data/keeperctl")]
    pub data_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub operation: Operation,
}

/// Registry entry point to drive
#[derive(Subcommand, Debug, Clone)]
pub enum Operation {
    /// Write an empty registry record, discarding prior content
    Init,
    /// Invoke a mutating function ("invoke", "init", or "delete")
    Invoke {
        /// Function name to route
        function: String,
        /// Positional string arguments for the function
        args: Vec<String>,
    },
    /// Query the registry (function must be "query")
    Query {
        /// Function name, expected to be "query"
        function: String,
        /// Positional string arguments for the function
        args: Vec<String>,
    },
}
