use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::super::user_insert::{PreparedUserData, UserInserter};
use super::super::USER_TABLE;
use crate::error::{AppError, AppResult};

/// PostgreSQL-specific implementation of UserInserter
pub struct PostgresUserInserter {
    pool: PgPool,
}

impl PostgresUserInserter {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserInserter for PostgresUserInserter {
    async fn execute_user_insert(&self, data: PreparedUserData) -> AppResult<i64> {
        let sql = format!(
            "INSERT INTO {} (login, created_on) VALUES ($1, $2) RETURNING id",
            USER_TABLE
        );

        let id: i64 = sqlx::query_scalar(&sql)
            .bind(&data.login)
            .bind(data.created_on)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to create user: {}", e)))?;

        Ok(id)
    }

    async fn execute_users_insert(&self, data: Vec<PreparedUserData>) -> AppResult<Vec<i64>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("INSERT INTO {} (login, created_on) ", USER_TABLE));
        builder.push_values(data, |mut row, user| {
            row.push_bind(user.login).push_bind(user.created_on);
        });
        builder.push(" RETURNING id");

        let ids: Vec<i64> = builder
            .build_query_scalar()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to create users: {}", e)))?;

        Ok(ids)
    }
}
