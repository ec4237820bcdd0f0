use crate::backend::database::USER_TABLE;
use crate::error::{AppError, AppResult};
use sqlx::SqlitePool;

/// Create the `user_info` table for SQLite if it does not exist
///
/// Timestamps are stored as RFC 3339 text.
pub async fn init_schema(pool: &SqlitePool) -> AppResult<()> {
    let users_sql = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            login VARCHAR(100) NOT NULL,
            created_on TEXT NOT NULL
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
pub async fn drop_schema(pool: &SqlitePool) -> AppResult<()> {
    let sql = format!("DROP TABLE IF EXISTS {}", USER_TABLE);
    sqlx::query(&sql)
        .execute(pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to drop table {}: {}", USER_TABLE, e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    #[tokio::test]
    async fn test_schema_creation_is_idempotent() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        init_schema(&pool).await.unwrap();
        init_schema(&pool).await.unwrap();

        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", USER_TABLE))
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count.0, 0);

        drop_schema(&pool).await.unwrap();
        let missing = sqlx::query(&format!("SELECT COUNT(*) FROM {}", USER_TABLE))
            .fetch_one(&pool)
            .await;
        assert!(missing.is_err());
    }
}
