use async_trait::async_trait;
use sqlx::PgPool;

use super::super::user_read::UserReader;
use super::super::USER_TABLE;
use crate::error::{AppError, AppResult};
use crate::models::UserInfo;

/// PostgreSQL-specific implementation of UserReader
pub struct PostgresUserReader {
    pool: PgPool,
}

impl PostgresUserReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserReader for PostgresUserReader {
    async fn find_user_by_id(&self, id: i64) -> AppResult<Option<UserInfo>> {
        let sql = format!(
            "SELECT id, login, created_on FROM {} WHERE id = $1",
            USER_TABLE
        );

        sqlx::query_as::<_, UserInfo>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to find user: {}", e)))
    }

    async fn find_all_users(&self) -> AppResult<Vec<UserInfo>> {
        let sql = format!(
            "SELECT id, login, created_on FROM {} ORDER BY id",
            USER_TABLE
        );

        sqlx::query_as::<_, UserInfo>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to list users: {}", e)))
    }
}
