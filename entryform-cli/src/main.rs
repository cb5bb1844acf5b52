//! Entry form CLI
//!
//! # Usage
//!
//! ```bash
//! # Submit an entry
//! entryform add --full-name "Asha Patel" --email asha@example.in --password pw \
//!     --address "12 Ring Road" --city surat --rating 4
//!
//! # Show entries, fix one, remove one
//! entryform list
//! entryform edit 0 --city Mumbai
//! entryform delete 0
//!
//! # Interactive form
//! entryform session
//!
//! # Configuration
//! entryform config show
//! entryform config init
//! ```

use clap::{Parser, Subcommand};
use entryform::cli::commands::{config::ConfigCommand, entry::EntryCommand};
use entryform::cli::{commands, CliContext, OutputFormat};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "entryform")]
#[command(version)]
#[command(about = "Entry form - collect, validate and manage feedback entries", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format (table, json, plain)
    #[arg(short, long, global = true, default_value = "table")]
    output_format: String,

    /// Suppress status messages
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Entry(EntryCommand),

    /// Interactive form session
    Session,

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_directive = if verbose {
        "entryform=debug"
    } else {
        "entryform=info"
    };
    tracing_log::LogTracer::init()?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_directive.parse()?),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Warning: logging unavailable: {}", e);
    }

    // Parse output format
    let output_format: OutputFormat = cli.output_format.parse().unwrap_or_else(|e| {
        eprintln!("Warning: {}. Using table format.", e);
        OutputFormat::Table
    });

    // Create CLI context
    let mut ctx = match CliContext::new(cli.config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    };
    ctx.output_format = output_format;
    ctx.quiet = cli.quiet;
    ctx.verbose = cli.verbose;
    debug!(config = %ctx.config_path.display(), "context ready");

    // Execute command
    let result = match cli.command {
        Commands::Entry(command) => commands::entry::execute(&ctx, command),
        Commands::Session => commands::session::execute(&ctx),
        Commands::Config { command } => commands::config::execute(&ctx, command),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
