//! Store Module
//!
//! In-memory inventory backed by a flat delimited text file.
//!
//! ## Responsibilities
//! - Load the backing file into an ordered sequence of records
//! - Answer queries with linear scans in store order
//! - Append and restock in memory
//! - Rewrite the whole backing file on save
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Header (fixed, discarded on load)            │
//! │ Country,Code,Product,Cost,Quantity           │
//! ├──────────────────────────────────────────────┤
//! │ Record line                                  │
//! │ ┌───────┬────┬───────┬──────┬──────────┐     │
//! │ │country│code│product│cost  │quantity  │     │
//! │ └───────┴────┴───────┴──────┴──────────┘     │
//! │ ... (one per record, store order)            │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Fields are joined by `,` with no quoting. A value that itself contains a
//! comma produces a line with too many fields and will not load back.

mod codec;
mod inventory;

pub use codec::{decode_record, encode_record, DELIMITER, FIELD_COUNT, HEADER};
pub use inventory::{load_records, save_records, LoadReport, Store};
