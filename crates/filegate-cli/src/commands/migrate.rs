//! Database migration commands.

use clap::{Args, Subcommand};

use crate::output;
use filegate_core::config::StoreProvider;
use filegate_core::error::AppError;
use filegate_database::DatabasePool;

use super::Cli;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, cli: &Cli) -> Result<(), AppError> {
    let config = cli.load_config()?;

    if config.database.provider == StoreProvider::Memory {
        output::print_warning("The memory store has no schema; nothing to migrate.");
        return Ok(());
    }

    match &args.command {
        MigrateCommand::Run => {
            let pool = DatabasePool::connect(&config.database).await?;
            println!("Running database migrations...");
            filegate_database::migration::run_migrations(pool.pool()).await?;
            pool.close().await;
            output::print_success("All migrations applied successfully.");
        }
    }

    Ok(())
}
