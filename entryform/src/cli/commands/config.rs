//! Config command - configuration management

use crate::cli::{CliContext, OutputFormat, OutputFormatter};
use crate::config::FormConfig;
use crate::error::{EntryFormError, EntryFormResult};
use crate::storage::RecordStore;
use clap::Subcommand;
use std::path::Path;

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Validate configuration file
    Validate,

    /// Initialize a new configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, default_value = "entryform.toml")]
        output: String,

        /// Overwrite existing file
        #[arg(short, long)]
        force: bool,
    },
}

pub fn execute(ctx: &CliContext, command: ConfigCommand) -> EntryFormResult<()> {
    let formatter = OutputFormatter::new(ctx.output_format);

    match &command {
        ConfigCommand::Show => command.show_config(ctx, &formatter),
        ConfigCommand::Validate => command.validate_config(ctx, &formatter),
        ConfigCommand::Init { output, force } => {
            command.init_config(Path::new(output), *force, &formatter)
        }
    }
}

impl ConfigCommand {
    fn show_config(&self, ctx: &CliContext, formatter: &OutputFormatter) -> EntryFormResult<()> {
        if ctx.output_format == OutputFormat::Json {
            formatter.json(&ctx.config);
            return Ok(());
        }

        formatter.section("Configuration");
        let source = if ctx.config_path.exists() {
            ctx.config_path.display().to_string()
        } else {
            format!("{} (not found, using defaults)", ctx.config_path.display())
        };
        formatter.kv("Config file", &source);
        formatter.kv("Data directory", &ctx.config.data_dir.display().to_string());
        formatter.kv("Slot", &ctx.config.slot);
        formatter.kv("Pretty JSON", &ctx.config.pretty.to_string());

        let bridge = ctx.config.file_bridge()?;
        formatter.kv("Store", &bridge.storage().describe());
        formatter.kv(
            "Slot file",
            &bridge.storage().slot_path(bridge.slot())?.display().to_string(),
        );
        Ok(())
    }

    fn validate_config(
        &self,
        ctx: &CliContext,
        formatter: &OutputFormatter,
    ) -> EntryFormResult<()> {
        let warnings = ctx.config.validate();
        if warnings.is_empty() {
            formatter.success("Configuration is valid");
        } else {
            for warning in &warnings {
                formatter.warning(warning);
            }
        }
        Ok(())
    }

    fn init_config(
        &self,
        output: &Path,
        force: bool,
        formatter: &OutputFormatter,
    ) -> EntryFormResult<()> {
        if output.exists() && !force {
            return Err(EntryFormError::ConfigError(format!(
                "{} already exists (use --force to overwrite)",
                output.display()
            )));
        }
        let content = FormConfig::default().to_toml()?;
        std::fs::write(output, content).map_err(|e| {
            EntryFormError::IoError(format!("Failed to write {}: {}", output.display(), e))
        })?;
        formatter.success(&format!("Wrote {}", output.display()));
        Ok(())
    }
}
