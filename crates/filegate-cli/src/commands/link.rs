//! File link management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output;
use filegate_core::config::StoreProvider;
use filegate_core::error::AppError;
use filegate_entity::link::{FileLink, LinkToken};
use filegate_service::{LinkRegistry, RevokeResult};

use super::Cli;

/// Arguments for link commands
#[derive(Debug, Args)]
pub struct LinkArgs {
    /// Link subcommand
    #[command(subcommand)]
    pub command: LinkCommand,
}

/// Link subcommands
#[derive(Debug, Subcommand)]
pub enum LinkCommand {
    /// Show a single link
    Show {
        /// Link token
        token: String,
    },
    /// Revoke a link
    Revoke {
        /// Link token
        token: String,
    },
    /// List the most recently created links
    List {
        /// Maximum number of links
        #[arg(short, long, default_value_t = 20)]
        limit: u32,
    },
}

/// Link display row
#[derive(Debug, Serialize, Tabled)]
struct LinkRow {
    /// Token
    token: String,
    /// Media kind
    kind: String,
    /// Artifact reference
    file_id: String,
    /// Revoked
    revoked: String,
    /// Created
    created_at: String,
}

impl From<&FileLink> for LinkRow {
    fn from(link: &FileLink) -> Self {
        Self {
            token: link.token.to_string(),
            kind: link.media_kind.to_string(),
            file_id: shorten(&link.artifact_ref, 24),
            revoked: if link.revoked { "yes" } else { "no" }.to_string(),
            created_at: link.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Execute link commands
pub async fn execute(args: &LinkArgs, cli: &Cli) -> Result<(), AppError> {
    let config = cli.load_config()?;
    if config.database.provider == StoreProvider::Memory {
        output::print_warning("The memory store is private to a running bot; results will be empty.");
    }
    let registry = LinkRegistry::new(filegate_database::open_store(&config.database).await?);

    match &args.command {
        LinkCommand::Show { token } => {
            let token = LinkToken::parse(token)?;
            let link = registry
                .resolve(&token)
                .await?
                .ok_or_else(|| AppError::not_found(format!("No link with token '{}'", token)))?;
            output::print_list(&[LinkRow::from(&link)], cli.format);
        }
        LinkCommand::Revoke { token } => {
            let token = LinkToken::parse(token)?;
            match registry.revoke(&token).await? {
                RevokeResult::Revoked => {
                    output::print_success(&format!("Link '{}' revoked.", token));
                }
                RevokeResult::NotFound => {
                    return Err(AppError::not_found(format!("No link with token '{}'", token)));
                }
            }
        }
        LinkCommand::List { limit } => {
            let links = registry.recent(*limit).await?;
            let rows: Vec<LinkRow> = links.iter().map(LinkRow::from).collect();
            output::print_list(&rows, cli.format);
        }
    }

    Ok(())
}

fn shorten(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let head: String = value.chars().take(max).collect();
        format!("{head}…")
    }
}
