use async_trait::async_trait;
use sqlx::SqlitePool;

use super::super::user_update::{PreparedUserUpdateData, UserUpdater};
use super::super::USER_TABLE;
use crate::error::{AppError, AppResult};

/// SQLite-specific implementation of UserUpdater
pub struct SqliteUserUpdater {
    pool: SqlitePool,
}

impl SqliteUserUpdater {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserUpdater for SqliteUserUpdater {
    async fn execute_user_update(&self, data: PreparedUserUpdateData) -> AppResult<bool> {
        let sql = format!("UPDATE {} SET login = ?1 WHERE id = ?2", USER_TABLE);

        let result = sqlx::query(&sql)
            .bind(&data.login)
            .bind(data.id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to update user: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
