//! # ShoeStock
//!
//! A single-user inventory manager for a shoe retailer with:
//! - Ordered in-memory store of shoe records
//! - Flat comma-delimited backing file, rewritten whole on every save
//! - Linear-scan queries (search by code, lowest/highest quantity, value)
//! - Interactive menu shell over any line-oriented input/output
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Interactive Shell                        │
//! │            (menu, prompts, retry-until-valid input)          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                         Store                                │
//! │        (ordered Vec<Record>, dirty flag, scans/mutations)    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │ Backing file  │
//!               │ (line codec)  │
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StockError, Result};
pub use config::{Config, MalformedLinePolicy};
pub use record::Record;
pub use store::{LoadReport, Store};
pub use shell::Shell;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ShoeStock
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
