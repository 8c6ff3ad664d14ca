//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::backup::{BackupMode, DEFAULT_BACKUP_FILE};
use crate::core::importer::DEFAULT_IMPORT_CSV;
use crate::core::store::DEFAULT_DATABASE;

/// Name of the per-directory config file
pub const LOCAL_CONFIG_FILE: &str = "inventory.yaml";

/// Inventory configuration with layered hierarchy
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SQLite database file
    pub database: Option<PathBuf>,

    /// CSV file imported at startup
    pub import_csv: Option<PathBuf>,

    /// CSV file written by backups
    pub backup_file: Option<PathBuf>,

    /// Append to or truncate the backup file
    pub backup_mode: Option<BackupMode>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (applied by the accessors)

        // 2. Global user config (~/.config/store-inventory/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::read_file(&global_path) {
                config.merge(global);
            }
        }

        // 3. Working directory config (./inventory.yaml)
        if let Some(local) = Self::read_file(Path::new(LOCAL_CONFIG_FILE)) {
            config.merge(local);
        }

        // 4. Environment variables
        config.merge(Self::from_env(|key| std::env::var(key).ok()));

        config
    }

    /// Read one config file; missing or invalid files are skipped
    fn read_file(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }
        let contents = std::fs::read_to_string(path).ok()?;
        match serde_yml::from_str::<Config>(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config file");
                None
            }
        }
    }

    /// Build the environment layer from a variable lookup
    fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Config {
        Config {
            database: lookup("INVENTORY_DB").map(PathBuf::from),
            import_csv: lookup("INVENTORY_CSV").map(PathBuf::from),
            backup_file: lookup("INVENTORY_BACKUP").map(PathBuf::from),
            backup_mode: lookup("INVENTORY_BACKUP_MODE").and_then(|m| BackupMode::parse(&m)),
        }
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "store-inventory")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(&mut self, other: Config) {
        if other.database.is_some() {
            self.database = other.database;
        }
        if other.import_csv.is_some() {
            self.import_csv = other.import_csv;
        }
        if other.backup_file.is_some() {
            self.backup_file = other.backup_file;
        }
        if other.backup_mode.is_some() {
            self.backup_mode = other.backup_mode;
        }
    }

    pub fn database(&self) -> PathBuf {
        self.database
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }

    pub fn import_csv(&self) -> PathBuf {
        self.import_csv
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_IMPORT_CSV))
    }

    pub fn backup_file(&self) -> PathBuf {
        self.backup_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BACKUP_FILE))
    }

    pub fn backup_mode(&self) -> BackupMode {
        self.backup_mode.unwrap_or_default()
    }
}
