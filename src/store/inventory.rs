//! Inventory store
//!
//! Ordered in-memory records plus whole-file load/save.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::{Config, MalformedLinePolicy};
use crate::error::{Result, StockError};
use crate::record::Record;

use super::codec::{decode_record, encode_record, HEADER};

/// Outcome of a load, alongside the records themselves
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Number of records successfully parsed
    pub records_loaded: usize,

    /// Malformed lines that were skipped (only under `SkipAndWarn`)
    pub skipped: Vec<StockError>,

    /// Set to `StorageUnavailable` when the backing file was missing
    pub unavailable: Option<StockError>,
}

impl LoadReport {
    /// Whether the load ran without skipping anything or missing the file
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.unavailable.is_none()
    }
}

/// Read all records from a backing file
///
/// The first line is a header and is discarded unconditionally. Blank lines
/// are ignored. A missing file is not an error: it yields no records and a
/// report carrying `StorageUnavailable`.
pub fn load_records(path: &Path, policy: MalformedLinePolicy) -> Result<(Vec<Record>, LoadReport)> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!("Inventory file {} not found, starting empty", path.display());
            let report = LoadReport {
                unavailable: Some(StockError::StorageUnavailable {
                    path: path.to_path_buf(),
                }),
                ..LoadReport::default()
            };
            return Ok((Vec::new(), report));
        }
        Err(e) => return Err(e.into()),
    };

    let mut records = Vec::new();
    let mut report = LoadReport::default();

    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        // Header
        if line_no == 1 {
            continue;
        }

        let decoded = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => decode_record(line, line_no),
            Err(_) => Err(StockError::MalformedRecord {
                line: line_no,
                reason: "line is not valid UTF-8".to_string(),
            }),
        };

        match decoded {
            Ok(record) => records.push(record),
            Err(e) => match policy {
                MalformedLinePolicy::Abort => return Err(e),
                MalformedLinePolicy::SkipAndWarn => {
                    tracing::warn!("Skipping line in {}: {}", path.display(), e);
                    report.skipped.push(e);
                }
            },
        }
    }

    report.records_loaded = records.len();
    tracing::info!(
        "Loaded {} records from {} ({} skipped)",
        report.records_loaded,
        path.display(),
        report.skipped.len()
    );

    Ok((records, report))
}

/// Overwrite the backing file with the header and every record in order
///
/// The file is truncated first; an interrupted write can leave it short.
pub fn save_records(path: &Path, records: &[Record]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    writeln!(writer, "{}", HEADER)?;
    for record in records {
        writeln!(writer, "{}", encode_record(record))?;
    }
    writer.flush()?;

    tracing::debug!("Saved {} records to {}", records.len(), path.display());
    Ok(())
}

/// The inventory
///
/// Owns its records exclusively. Mutations only touch memory; `save` brings
/// the backing file back in line. Between a mutation and the next save the
/// store is dirty, i.e. strictly ahead of the file.
#[derive(Debug)]
pub struct Store {
    /// Backing file
    path: PathBuf,

    /// Records in file order, then append order
    records: Vec<Record>,

    /// Memory has changes the file does not
    dirty: bool,
}

impl Store {
    /// Create an empty store for `path` without touching disk
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_records(path, Vec::new())
    }

    /// Create a store from records already in hand
    pub fn with_records(path: impl Into<PathBuf>, records: Vec<Record>) -> Self {
        Self {
            path: path.into(),
            records,
            dirty: false,
        }
    }

    /// Load the store described by `config`
    pub fn open(config: &Config) -> Result<(Self, LoadReport)> {
        config.validate()?;
        let (records, report) = load_records(&config.inventory_path, config.malformed_lines)?;
        Ok((Self::with_records(&config.inventory_path, records), report))
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified backing file
    pub fn open_path(path: &Path) -> Result<(Self, LoadReport)> {
        let config = Config::builder().inventory_path(path).build();
        Self::open(&config)
    }

    /// Write every record back to the backing file
    pub fn save(&mut self) -> Result<()> {
        save_records(&self.path, &self.records)?;
        self.dirty = false;
        Ok(())
    }

    /// Append a record at the end; does not persist
    pub fn add(&mut self, record: Record) {
        tracing::debug!("Adding record with code {}", record.code);
        self.records.push(record);
        self.dirty = true;
    }

    /// Every record paired with its stock value, in store order
    pub fn with_values(&self) -> impl Iterator<Item = (&Record, u64)> + '_ {
        self.records.iter().map(|record| (record, record.value()))
    }

    /// First record whose code matches exactly (case-sensitive)
    pub fn find_by_code(&self, code: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.code == code)
    }

    /// Index of the record with the lowest quantity; ties keep the earliest
    pub fn lowest_quantity(&self) -> Option<usize> {
        self.scan_quantity(|candidate, best| candidate < best)
    }

    /// Index of the record with the highest quantity; ties keep the earliest
    pub fn highest_quantity(&self) -> Option<usize> {
        self.scan_quantity(|candidate, best| candidate > best)
    }

    /// Add `amount` units to the record at `index`; does not persist
    pub fn restock(&mut self, index: usize, amount: u64) -> Result<&Record> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(StockError::IndexOutOfRange { index, len })?;

        record.quantity = record
            .quantity
            .checked_add(amount)
            .ok_or(StockError::QuantityOverflow { index })?;
        self.dirty = true;

        tracing::info!(
            "Restocked {} by {} to {}",
            record.code,
            amount,
            record.quantity
        );
        Ok(record)
    }

    /// Record at `index`
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether memory holds changes not yet saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Linear scan keeping the current best unless `better` holds strictly
    fn scan_quantity(&self, better: impl Fn(u64, u64) -> bool) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (index, record) in self.records.iter().enumerate() {
            match best {
                Some(current) if !better(record.quantity, self.records[current].quantity) => {}
                _ => best = Some(index),
            }
        }
        best
    }
}
