//! Configuration for recordstore
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a Store instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Capacity Configuration
    // -------------------------------------------------------------------------
    /// Maximum number of users `add_user` accepts
    pub max_users: usize,

    /// Maximum number of items `insert_item` accepts
    pub max_items: usize,

    // -------------------------------------------------------------------------
    // Persistence Configuration
    // -------------------------------------------------------------------------
    /// Default data file used by the CLI
    pub data_file: PathBuf,

    // -------------------------------------------------------------------------
    // Diagnostics
    // -------------------------------------------------------------------------
    /// Log every recorded error at warn level instead of debug
    pub debug_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_users: 100,
            max_items: 200,
            data_file: PathBuf::from("data.bin"),
            debug_mode: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the maximum number of users
    pub fn max_users(mut self, count: usize) -> Self {
        self.config.max_users = count;
        self
    }

    /// Set the maximum number of items
    pub fn max_items(mut self, count: usize) -> Self {
        self.config.max_items = count;
        self
    }

    /// Set the data file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Enable or disable debug mode
    pub fn debug_mode(mut self, enabled: bool) -> Self {
        self.config.debug_mode = enabled;
        self
    }

    /// Finish building the config
    pub fn build(self) -> Config {
        self.config
    }
}
