//! Store selection from configuration.

use std::sync::Arc;

use tracing::info;

use filegate_core::config::{DatabaseConfig, StoreProvider};
use filegate_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::migration::run_migrations;
use crate::repositories::{FileLinkRepository, FileLinkStore, MemoryFileLinkStore};

/// Open the configured link store. The PostgreSQL backend is migrated
/// before it is returned.
pub async fn open_store(config: &DatabaseConfig) -> AppResult<Arc<dyn FileLinkStore>> {
    match config.provider {
        StoreProvider::Postgres => {
            let pool = DatabasePool::connect(config).await?;
            run_migrations(pool.pool()).await?;
            Ok(Arc::new(FileLinkRepository::new(pool.into_pool())))
        }
        StoreProvider::Memory => {
            info!("Using in-memory link store; links will not survive a restart");
            Ok(Arc::new(MemoryFileLinkStore::new()))
        }
    }
}
