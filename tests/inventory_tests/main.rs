//! Inventory test suite
//!
//! One test target for the store, codec and shell tests so they share
//! helpers and compile once.

mod shell_tests;

use std::fs;
use std::path::{Path, PathBuf};

use shoestock::record::Record;
use tempfile::TempDir;

// =============================================================================
// Shared Helpers
// =============================================================================

/// Temp directory plus the path of a (not yet created) backing file in it
pub fn setup_temp_inventory() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("inventory.txt");
    (temp_dir, path)
}

/// Write raw file contents
pub fn write_file(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

/// The three-shoe inventory used throughout
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new("UK", "A1", "Sneaker", 20, 5),
        Record::new("US", "B2", "Boot", 50, 1),
        Record::new("UK", "C3", "Sandal", 10, 5),
    ]
}
