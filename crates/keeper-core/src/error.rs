//! Error types for the membership registry

use crate::ledger::BackendError;
use thiserror::Error;

/// Result type alias using [`RegistryError`].
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Membership registry error types
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Wrong number of positional arguments for the selected operation
    #[error("incorrect number of arguments: expected {expected}, got {actual}")]
    ArgumentCount { expected: usize, actual: usize },

    /// Unrecognized function name on the invoke path
    #[error("unknown function invocation: {0}")]
    UnknownFunction(String),

    /// Query entry point called with a function other than "query"
    #[error("invalid query function name: {0:?}, expecting \"query\"")]
    InvalidFunction(String),

    /// Ledger read failure
    #[error("failed to read registry from ledger")]
    Read(#[source] BackendError),

    /// Ledger write failure
    #[error("failed to write registry to ledger")]
    Write(#[source] BackendError),

    /// Ledger delete failure
    #[error("failed to delete key from ledger")]
    Delete(#[source] BackendError),

    /// Malformed registry record
    #[error("failed to decode registry record")]
    Deserialize(#[source] serde_json::Error),

    /// Registry record could not be encoded
    #[error("failed to encode registry record")]
    Serialize(#[source] serde_json::Error),
}
