//! keeperctl - Keeper witness registry host
//!
//! Opens the sled-backed ledger, dispatches a single registry operation,
//! and prints the status byte for operations that return one.

use clap::Parser;
use keeper_core::MembershipRegistry;
use keeperctl::config::{Config, Operation};
use keeperctl::storage::SledLedger;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    // Parse configuration
    let config = Config::parse();

    // Initialize logging
    let default_level = if config.verbose {
        "keeperctl=debug"
    } else {
        "keeperctl=info"
    };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(default_level.parse().unwrap()))
        .init();

    info!(
        "keeperctl v{} - Keeper Witness Registry Host",
        env!("CARGO_PKG_VERSION")
    );

    match run(&config) {
        Ok(payload) => {
            info!("Invocation succeeded");
            if let Some(status) = payload.first() {
                println!("{}", status);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Invocation failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Dispatch the selected operation against the ledger.
fn run(config: &Config) -> anyhow::Result<Vec<u8>> {
    let ledger = SledLedger::open(&config.data_dir)?;
    let registry = MembershipRegistry::new(ledger.clone());

    let payload = match &config.operation {
        Operation::Init => {
            info!("Initializing registry in {}", config.data_dir.display());
            registry.init("init", &[])?
        }
        Operation::Invoke { function, args } => {
            info!("Invoking function {:?} with {} argument(s)", function, args.len());
            registry.invoke(function, args)?
        }
        Operation::Query { function, args } => {
            info!("Querying function {:?} with {} argument(s)", function, args.len());
            registry.query(function, args)?
        }
    };

    ledger.flush()?;
    Ok(payload)
}
