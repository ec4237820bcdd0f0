use async_trait::async_trait;
use sqlx::SqlitePool;

use super::super::user_delete::UserDeleter;
use super::super::USER_TABLE;
use crate::error::{AppError, AppResult};
use crate::models::UserInfo;

/// SQLite-specific implementation of UserDeleter
pub struct SqliteUserDeleter {
    pool: SqlitePool,
}

impl SqliteUserDeleter {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDeleter for SqliteUserDeleter {
    async fn execute_user_delete(&self, id: i64) -> AppResult<Option<UserInfo>> {
        let sql = format!(
            "DELETE FROM {} WHERE id = ?1 RETURNING id, login, created_on",
            USER_TABLE
        );

        sqlx::query_as::<_, UserInfo>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete user: {}", e)))
    }
}
