use async_trait::async_trait;
use sqlx::PgPool;

use super::super::user_delete::UserDeleter;
use super::super::USER_TABLE;
use crate::error::{AppError, AppResult};
use crate::models::UserInfo;

/// PostgreSQL-specific implementation of UserDeleter
pub struct PostgresUserDeleter {
    pool: PgPool,
}

impl PostgresUserDeleter {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDeleter for PostgresUserDeleter {
    async fn execute_user_delete(&self, id: i64) -> AppResult<Option<UserInfo>> {
        let sql = format!(
            "DELETE FROM {} WHERE id = $1 RETURNING id, login, created_on",
            USER_TABLE
        );

        sqlx::query_as::<_, UserInfo>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete user: {}", e)))
    }
}
