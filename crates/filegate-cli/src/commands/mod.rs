//! CLI command definitions and dispatch.

pub mod config;
pub mod link;
pub mod migrate;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use filegate_core::config::AppConfig;
use filegate_core::error::AppError;

/// FileGate: channel-gated file sharing bot
#[derive(Debug, Parser)]
#[command(name = "filegate", version, about, long_about = None)]
pub struct Cli {
    /// Path to the base configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Environment overlay to apply on top of the base file
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Configuration inspection
    Config(config::ConfigArgs),
    /// File link management
    Link(link::LinkArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, self).await,
            Commands::Config(args) => config::execute(args, self).await,
            Commands::Link(args) => link::execute(args, self).await,
        }
    }

    /// Load configuration from the selected file and environment
    pub fn load_config(&self) -> Result<AppConfig, AppError> {
        AppConfig::load_from(&self.config, &self.env)
    }
}
