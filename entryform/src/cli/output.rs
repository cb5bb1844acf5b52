//! Output formatting for CLI commands

use crate::form::{rating_glyph, FieldErrors, FormField, FormView, Record};
use crate::storage::StorageHealth;
use colored::Colorize;
use serde::Serialize;
use std::fmt::Display;

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
    /// Plain text (minimal formatting)
    Plain,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "plain" => Ok(OutputFormat::Plain),
            _ => Err(format!(
                "Unknown output format '{}'. Valid options: table, json, plain",
                s
            )),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Plain => write!(f, "plain"),
        }
    }
}

/// Columns of the records table; the password is never shown
const RECORD_COLUMNS: [&str; 7] = ["#", "Name", "Email", "Address", "City", "Rating", "Feedback"];

/// Output formatter for consistent CLI output
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Plain => println!("{}", message),
            OutputFormat::Table => println!("{} {}", "✓".green(), message),
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        match self.format {
            OutputFormat::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({"status": "error", "message": message})
                );
            }
            OutputFormat::Plain => eprintln!("error: {}", message),
            OutputFormat::Table => eprintln!("{} {}", "✗".red(), message),
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        match self.format {
            OutputFormat::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({"status": "warning", "message": message})
                );
            }
            OutputFormat::Plain => eprintln!("warning: {}", message),
            OutputFormat::Table => eprintln!("{} {}", "⚠".yellow(), message),
        }
    }

    /// Print data as JSON
    pub fn json<T: Serialize>(&self, data: &T) {
        match serde_json::to_string_pretty(data) {
            Ok(json) => println!("{}", json),
            Err(e) => self.error(&format!("Failed to serialize to JSON: {}", e)),
        }
    }

    /// Print a simple key-value pair
    pub fn kv(&self, key: &str, value: &str) {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::json!({key: value}));
            }
            OutputFormat::Table => {
                println!("{}: {}", key.cyan(), value);
            }
            OutputFormat::Plain => {
                println!("{}: {}", key, value);
            }
        }
    }

    /// Print a section title
    pub fn section(&self, title: &str) {
        match self.format {
            OutputFormat::Table => {
                println!();
                println!("{}", title.bold().underline());
                println!();
            }
            OutputFormat::Plain => {
                println!();
                println!("{}", title);
                println!();
            }
            OutputFormat::Json => {}
        }
    }

    /// Print a list item
    pub fn list_item(&self, item: &str) {
        match self.format {
            OutputFormat::Table => {
                println!("  {} {}", "•".cyan(), item);
            }
            _ => {
                println!("  - {}", item);
            }
        }
    }

    /// Print the submitted entries
    pub fn records(&self, records: &[Record]) {
        match self.format {
            OutputFormat::Json => self.json(&records),
            OutputFormat::Plain => {
                for (index, record) in records.iter().enumerate() {
                    println!("{}", record_cells(index, record).join("\t"));
                }
            }
            OutputFormat::Table => {
                self.section("Submitted Data");
                if records.is_empty() {
                    self.list_item("(no entries)");
                    return;
                }
                let rows: Vec<Vec<String>> = records
                    .iter()
                    .enumerate()
                    .map(|(index, record)| record_cells(index, record))
                    .collect();
                for line in render_table(&RECORD_COLUMNS, &rows) {
                    println!("{}", line);
                }
            }
        }
    }

    /// Print the validation errors of a rejected submit, one line per field
    pub fn field_errors(&self, errors: &FieldErrors) {
        match self.format {
            OutputFormat::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({"status": "rejected", "errors": errors})
                );
            }
            _ => {
                for (field, message) in errors.iter() {
                    self.error(&format!("{}: {}", field, message));
                }
            }
        }
    }

    /// Print the whole form: draft, rating scale, errors and the records table
    pub fn form(&self, view: &FormView) {
        if self.format == OutputFormat::Json {
            self.json(view);
            return;
        }

        let title = match view.edit_row {
            Some(row) => format!("Editing entry #{}", row),
            None => "New entry".to_string(),
        };
        self.section(&title);
        for field in FormField::ALL {
            if field == FormField::Rating {
                let scale: Vec<String> = view
                    .rating_scale
                    .iter()
                    .map(|slot| {
                        if slot.highlighted {
                            format!("[{}]", slot.glyph)
                        } else {
                            format!(" {} ", slot.glyph)
                        }
                    })
                    .collect();
                self.kv("rating", &scale.join(""));
            } else {
                self.kv(field.name(), &view.draft.get(field));
            }
            if let Some(message) = view.errors.get(field) {
                self.error(message);
            }
        }
        self.kv("action", view.submit_label);

        if let StorageHealth::Degraded { reason } = &view.storage {
            self.warning(&format!("Entries are not being saved: {}", reason));
        }
        self.records(&view.records);
    }
}

fn record_cells(index: usize, record: &Record) -> Vec<String> {
    vec![
        index.to_string(),
        record.full_name.clone(),
        record.email.clone(),
        record.address.clone(),
        record.city.to_string(),
        rating_glyph(record.rating).unwrap_or("?").to_string(),
        record.feedback.clone(),
    ]
}

/// Left-aligned text table with a header rule; widths are counted in chars
fn render_table(columns: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let pad = |cells: Vec<String>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let fill = width.saturating_sub(cell.chars().count());
                format!("{}{}", cell, " ".repeat(fill))
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(pad(columns.iter().map(|c| c.to_string()).collect()));
    lines.push("-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1)));
    for row in rows {
        lines.push(pad(row.clone()));
    }
    lines
}
