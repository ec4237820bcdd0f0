use crate::backend::database::USER_TABLE;
use crate::error::{AppError, AppResult};
use sqlx::PgPool;

/// Create the `user_info` table for PostgreSQL if it does not exist
pub async fn init_schema(pool: &PgPool) -> AppResult<()> {
    let users_sql = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            login VARCHAR(100) NOT NULL,
            created_on TIMESTAMP WITH TIME ZONE NOT NULL
        )
        "#,
        USER_TABLE
    );

    sqlx::query(&users_sql)
        .execute(pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to create users table: {}", e)))?;

    Ok(())
}

/// Drop the `user_info` table
pub async fn drop_schema(pool: &PgPool) -> AppResult<()> {
    let sql = format!("DROP TABLE IF EXISTS {}", USER_TABLE);
    sqlx::query(&sql)
        .execute(pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to drop table {}: {}", USER_TABLE, e)))?;

    Ok(())
}
