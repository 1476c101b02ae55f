//! Table and JSON rendering for CLI commands.

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

fn to_json<T: Serialize + ?Sized>(value: &T, fallback: &str) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| fallback.to_string())
}

/// Render rows as a table, or as a JSON array.
pub fn print_list<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", to_json(rows, "[]")),
        OutputFormat::Table if rows.is_empty() => println!("No links found."),
        OutputFormat::Table => {
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("{table}");
        }
    }
}

/// Render a single value with its `Debug` layout, or as JSON.
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", to_json(item, "{}")),
        OutputFormat::Table => println!("{item:#?}"),
    }
}

/// `✓ message` on stdout
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// `⚠ message` on stdout
pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

/// `✗ message` on stderr
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Aligned `key: value` line
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<16} {value}", format!("{key}:"));
}
