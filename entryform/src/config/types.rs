use crate::error::{EntryFormError, EntryFormResult};
use crate::storage::{EntryStoreBridge, FileRecordStore, DEFAULT_SLOT};
use crate::utils::fs::sanitize_filename;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Environment variable overriding `data_dir`
pub const DATA_DIR_ENV: &str = "ENTRYFORM_DATA_DIR";

/// Searched in order when no config file is given
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["config/entryform.toml", "entryform.toml"];

fn default_data_dir() -> PathBuf {
    PathBuf::from(".entryform")
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Directory holding the persisted slot
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Name of the slot holding the record list
    #[serde(default = "default_slot")]
    pub slot: String,
    /// Pretty-print the stored JSON
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            slot: default_slot(),
            pretty: default_pretty(),
        }
    }
}

impl FormConfig {
    /// Load from a TOML file; a missing file gives the defaults
    pub fn load(path: &Path) -> EntryFormResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            EntryFormError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_toml(&content).map_err(|e| {
            EntryFormError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    pub fn from_toml(content: &str) -> EntryFormResult<Self> {
        toml::from_str(content).map_err(|e| EntryFormError::ConfigError(e.to_string()))
    }

    pub fn to_toml(&self) -> EntryFormResult<String> {
        toml::to_string_pretty(self).map_err(|e| EntryFormError::ConfigError(e.to_string()))
    }

    /// Resolve the config file to use and load it, then apply environment overrides.
    ///
    /// Returns the path the configuration is associated with, even when that file does
    /// not exist and defaults were used.
    pub fn resolve(explicit: Option<PathBuf>) -> EntryFormResult<(PathBuf, Self)> {
        let path = match explicit {
            Some(path) => path,
            None => DEFAULT_CONFIG_PATHS
                .iter()
                .map(PathBuf::from)
                .find(|p| p.exists())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATHS[1])),
        };
        let mut config = Self::load(&path)?;
        config.apply_env_overrides(std::env::var(DATA_DIR_ENV).ok());
        Ok((path, config))
    }

    fn apply_env_overrides(&mut self, data_dir: Option<String>) {
        if let Some(dir) = data_dir.filter(|d| !d.trim().is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
    }

    /// Problems that do not prevent running but are worth reporting
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if sanitize_filename(&self.slot).is_empty() {
            warnings.push(format!("Slot name '{}' has no usable characters", self.slot));
        } else if sanitize_filename(&self.slot) != self.slot {
            warnings.push(format!(
                "Slot name '{}' will be stored as '{}.json'",
                self.slot,
                sanitize_filename(&self.slot)
            ));
        }
        if self.data_dir.is_file() {
            warnings.push(format!(
                "Data directory {} is a file",
                self.data_dir.display()
            ));
        }
        warnings
    }

    /// File-backed bridge for this configuration
    pub fn file_bridge(&self) -> EntryFormResult<EntryStoreBridge<FileRecordStore>> {
        let store = FileRecordStore::new(self.data_dir.clone())?;
        Ok(EntryStoreBridge::new(Arc::new(store))
            .with_slot(self.slot.clone())
            .with_pretty(self.pretty))
    }
}
