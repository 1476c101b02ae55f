//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. The resulting [`AppConfig`] is built once at startup and handed
//! to every component constructor; it is never mutated afterwards.

pub mod access;
pub mod bot;
pub mod cleanup;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::access::{AdminConfig, GateConfig};
pub use self::bot::BotConfig;
pub use self::cleanup::CleanupConfig;
pub use self::database::{DatabaseConfig, StoreProvider};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Environment variable prefix for overrides (`FILEGATE__BOT__TOKEN`, ...).
pub const ENV_PREFIX: &str = "FILEGATE";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay) and
/// `FILEGATE__*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bot API credentials and polling settings.
    pub bot: BotConfig,
    /// Link store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// The single administrator identity.
    pub admin: AdminConfig,
    /// Channel membership requirements.
    #[serde(default)]
    pub gate: GateConfig,
    /// Message cleanup settings.
    #[serde(default)]
    pub cleanup: CleanupConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `config/default.toml`, the `config/{env}.toml`
    /// overlay and `FILEGATE__*` environment variables.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config/default", env)
    }

    /// Load configuration using an explicit base file instead of
    /// `config/default`. The environment overlay is looked up next to it.
    pub fn load_from(base: &str, env: &str) -> Result<Self, AppError> {
        Self::load_with_env(base, env, None)
    }

    fn load_with_env(
        base: &str,
        env: &str,
        vars: Option<config::Map<String, String>>,
    ) -> Result<Self, AppError> {
        let base = base.trim_end_matches(".toml");
        let overlay = match base.rsplit_once('/') {
            Some((dir, _)) => format!("{dir}/{env}"),
            None => env.to_string(),
        };

        let builder = config::Config::builder()
            .add_source(config::File::with_name(base).required(false))
            .add_source(config::File::with_name(&overlay).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("gate.channels")
                    .source(vars),
            );

        Self::build(builder)
    }

    /// Parse configuration from an in-memory TOML document.
    pub fn from_toml(toml: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml));
        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, AppError> {
        let config = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let mut parsed: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        // `FILEGATE__GATE__CHANNELS=""` parses as `[""]` and means no channels.
        parsed.gate.channels = parsed
            .gate
            .channels
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();

        parsed.validate()?;
        Ok(parsed)
    }

    /// Reject configurations the bot cannot run with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.bot.token.trim().is_empty() {
            return Err(AppError::configuration("bot.token must be set"));
        }
        if self.admin.user_id == 0 {
            return Err(AppError::configuration("admin.user_id must be set"));
        }
        if self.cleanup.delay_minutes == 0 {
            return Err(AppError::configuration(
                "cleanup.delay_minutes must be greater than zero",
            ));
        }
        if self.cleanup.delay_minutes > CleanupConfig::MAX_DELAY_MINUTES {
            return Err(AppError::configuration(format!(
                "cleanup.delay_minutes must be at most {}",
                CleanupConfig::MAX_DELAY_MINUTES
            )));
        }
        if self.database.provider == StoreProvider::Postgres && self.database.url.is_empty() {
            return Err(AppError::configuration(
                "database.url is required for the postgres provider",
            ));
        }
        if let Some(bad) = self.gate.channels.iter().find(|c| c.trim().is_empty()) {
            return Err(AppError::configuration(format!(
                "gate.channels contains an empty entry: {bad:?}"
            )));
        }
        Ok(())
    }
}
