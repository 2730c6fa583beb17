//! Error types for ShoeStock
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using StockError
pub type Result<T> = std::result::Result<T, StockError>;

/// Unified error type for ShoeStock operations
#[derive(Debug, Error)]
pub enum StockError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Backing File Errors
    // -------------------------------------------------------------------------
    /// The backing file does not exist at load time
    #[error("Inventory file {} does not exist", .path.display())]
    StorageUnavailable { path: PathBuf },

    /// A data line could not be turned into a record (line is 1-based)
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("Index {index} out of range for inventory of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Restocking item {index} would overflow its quantity")]
    QuantityOverflow { index: usize },

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
