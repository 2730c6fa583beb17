//! Configuration for ShoeStock
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, StockError};

/// Default backing file, relative to the working directory
pub const DEFAULT_INVENTORY_PATH: &str = "inventory.txt";

/// Main configuration for a ShoeStock session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Backing file holding the inventory
    pub inventory_path: PathBuf,

    /// What to do with a data line that does not parse into a record
    pub malformed_lines: MalformedLinePolicy,
}

/// Load policy for malformed data lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedLinePolicy {
    /// Fail the whole load on the first bad line
    Abort,

    /// Skip the line, log a warning and record it in the load report
    #[default]
    SkipAndWarn,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from(DEFAULT_INVENTORY_PATH),
            malformed_lines: MalformedLinePolicy::default(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the config is usable before opening a store
    pub fn validate(&self) -> Result<()> {
        if self.inventory_path.as_os_str().is_empty() {
            return Err(StockError::Config(
                "inventory path must not be empty".to_string(),
            ));
        }
        if self.inventory_path.is_dir() {
            return Err(StockError::Config(format!(
                "inventory path {} is a directory",
                self.inventory_path.display()
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing file path
    pub fn inventory_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.inventory_path = path.into();
        self
    }

    /// Set the malformed line policy
    pub fn malformed_lines(mut self, policy: MalformedLinePolicy) -> Self {
        self.config.malformed_lines = policy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
