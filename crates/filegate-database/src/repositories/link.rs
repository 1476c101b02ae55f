//! PostgreSQL file link repository.

use async_trait::async_trait;
use sqlx::PgPool;

use filegate_core::error::{AppError, ErrorKind};
use filegate_core::result::AppResult;
use filegate_entity::link::{CreateFileLink, FileLink, LinkToken};

use super::FileLinkStore;

/// Repository for the `file_links` table.
#[derive(Debug, Clone)]
pub struct FileLinkRepository {
    pool: PgPool,
}

impl FileLinkRepository {
    /// Create a new file link repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileLinkStore for FileLinkRepository {
    async fn insert(&self, data: &CreateFileLink) -> AppResult<FileLink> {
        sqlx::query_as::<_, FileLink>(
            "INSERT INTO file_links (token, artifact_ref, media_kind, revoked, created_at) \
             VALUES ($1, $2, $3, FALSE, $4) \
             ON CONFLICT (token) DO NOTHING \
             RETURNING token, artifact_ref, media_kind, revoked, created_at",
        )
        .bind(data.token.as_str())
        .bind(&data.artifact.file_id)
        .bind(data.artifact.kind.as_str())
        .bind(data.created_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create file link", e))?
        .ok_or_else(|| AppError::conflict(format!("Link token '{}' already exists", data.token)))
    }

    async fn find_by_token(&self, token: &LinkToken) -> AppResult<Option<FileLink>> {
        sqlx::query_as::<_, FileLink>(
            "SELECT token, artifact_ref, media_kind, revoked, created_at \
             FROM file_links WHERE token = $1",
        )
        .bind(token.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file link", e))
    }

    async fn mark_revoked(&self, token: &LinkToken) -> AppResult<bool> {
        let result = sqlx::query("UPDATE file_links SET revoked = TRUE WHERE token = $1")
            .bind(token.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to revoke file link", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_recent(&self, limit: u32) -> AppResult<Vec<FileLink>> {
        sqlx::query_as::<_, FileLink>(
            "SELECT token, artifact_ref, media_kind, revoked, created_at \
             FROM file_links ORDER BY created_at DESC LIMIT $1",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list file links", e))
    }
}
