//! Error types for the dns-status crate.
//!
//! The status computations themselves are total. Errors only come from
//! loading configuration, validating caller input, and the status store.

use dns_status_types::ComponentMismatch;
use thiserror::Error;

/// Errors surfaced to the host reconciler.
#[derive(Debug, Error)]
pub enum StatusError {
    /// Configuration is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading configuration from disk failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Old and desired version vectors track different components.
    #[error(transparent)]
    ComponentMismatch(#[from] ComponentMismatch),

    /// The status store rejected a read or write.
    #[error("status store error: {0}")]
    Store(String),
}

/// Result type for status operations.
pub type StatusResult<T> = Result<T, StatusError>;
