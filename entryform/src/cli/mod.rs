//! Entry form CLI module
//!
//! Command-line presentation layer over the form engine.
//!
//! # Commands
//!
//! - `list` - Show submitted entries
//! - `add` - Submit a new entry
//! - `edit` - Update an existing entry
//! - `delete` - Remove an entry
//! - `session` - Interactive form session
//! - `config` - Configuration (show, validate, init)

pub mod commands;
pub mod context;
pub mod output;

pub use context::CliContext;
pub use output::{OutputFormat, OutputFormatter};
