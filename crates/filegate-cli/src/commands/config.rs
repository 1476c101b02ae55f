//! Configuration inspection commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use filegate_core::config::AppConfig;
use filegate_core::error::AppError;
use filegate_database::connection::mask_password;

use super::Cli;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration with secrets masked
    Show,
    /// Validate the configuration
    Check,
}

/// Execute config commands
pub async fn execute(args: &ConfigArgs, cli: &Cli) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = cli.load_config()?;
            output::print_item(&redacted(config), cli.format);
        }
        ConfigCommand::Check => match cli.load_config() {
            Ok(config) => {
                output::print_success(&format!(
                    "Configuration '{}' ({}) is valid",
                    cli.config, cli.env
                ));
                output::print_kv("Store", &format!("{:?}", config.database.provider));
                output::print_kv("Database", &mask_password(&config.database.url));
                output::print_kv("Admin", &config.admin.user_id.to_string());
                output::print_kv("Channels", &config.gate.channels.join(", "));
                output::print_kv(
                    "Cleanup delay",
                    &format!("{} min", config.cleanup.delay_minutes),
                );
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {}", e));
                return Err(e);
            }
        },
    }

    Ok(())
}

/// Copy of `config` that is safe to print.
fn redacted(mut config: AppConfig) -> AppConfig {
    config.bot.token = "****".to_string();
    config.database.url = mask_password(&config.database.url);
    config
}
