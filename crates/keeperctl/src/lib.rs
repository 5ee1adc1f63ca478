//! keeperctl - Keeper witness registry host
//!
//! This binary hosts the membership registry over a local sled-backed
//! ledger:
//! - One-shot dispatch of init/invoke/query operations
//! - Durable key-value storage under a data directory
//! - Wire-compatible single-byte result payloads

pub mod config;
pub mod storage;

pub use config::Config;
pub use storage::SledLedger;
