//! CLI context - shared state and services for all commands

use crate::config::FormConfig;
use crate::error::EntryFormResult;
use crate::form::FormSession;
use crate::storage::FileRecordStore;
use std::path::PathBuf;

/// Shared context for CLI commands
pub struct CliContext {
    /// Path of the configuration file (may not exist when defaults are used)
    pub config_path: PathBuf,
    /// Loaded configuration
    pub config: FormConfig,
    /// Output format preference
    pub output_format: super::OutputFormat,
    /// Quiet mode (suppress status messages)
    pub quiet: bool,
    /// Verbose mode (extra debug output)
    pub verbose: bool,
}

impl CliContext {
    /// Create a context from an explicit config file, or the default search paths
    pub fn new(config_path: Option<PathBuf>) -> EntryFormResult<Self> {
        let (config_path, config) = FormConfig::resolve(config_path)?;
        Ok(Self {
            config_path,
            config,
            output_format: super::OutputFormat::Table,
            quiet: false,
            verbose: false,
        })
    }

    /// Open a form session over the configured file store
    pub fn open_session(&self) -> EntryFormResult<FormSession<FileRecordStore>> {
        let bridge = self.config.file_bridge()?;
        Ok(FormSession::open(bridge))
    }

    /// Print status message (respects quiet mode)
    pub fn status(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }
}
