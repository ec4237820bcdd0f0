use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

use super::super::config::DatabaseBackendConfig;
use super::{SqliteUserDeleter, SqliteUserInserter, SqliteUserReader, SqliteUserUpdater};
use crate::backend::database::{
    UnifiedUserDeleteOps, UnifiedUserInsertOps, UnifiedUserReadOps, UnifiedUserUpdateOps,
};
use crate::backend::{Backend, UserBackend};
use crate::error::{AppError, AppResult};
use crate::models::{UserCreationInfo, UserInfo};

/// SQLite database backend implementation
///
/// Used for local development and tests; `:memory:` keeps the whole
/// store inside the pool's connections.
pub struct SqliteBackend {
    pool: SqlitePool,
    user_insert_ops: UnifiedUserInsertOps<SqliteUserInserter>,
    user_update_ops: UnifiedUserUpdateOps<SqliteUserUpdater>,
    user_delete_ops: UnifiedUserDeleteOps<SqliteUserDeleter>,
    user_read_ops: UnifiedUserReadOps<SqliteUserReader>,
}

impl SqliteBackend {
    /// Create a new SQLite backend instance
    pub fn new(pool: SqlitePool) -> Self {
        let user_inserter = SqliteUserInserter::new(pool.clone());
        let user_updater = SqliteUserUpdater::new(pool.clone());
        let user_deleter = SqliteUserDeleter::new(pool.clone());
        let user_reader = SqliteUserReader::new(pool.clone());

        Self {
            pool,
            user_insert_ops: UnifiedUserInsertOps::new(user_inserter),
            user_update_ops: UnifiedUserUpdateOps::new(user_updater),
            user_delete_ops: UnifiedUserDeleteOps::new(user_deleter),
            user_read_ops: UnifiedUserReadOps::new(user_reader),
        }
    }

    fn connect_options(config: &DatabaseBackendConfig) -> AppResult<SqliteConnectOptions> {
        let url = if config.is_memory_database() {
            "sqlite::memory:".to_string()
        } else if config.connection_url.starts_with("sqlite:") {
            config.connection_url.clone()
        } else {
            format!("sqlite:{}", config.connection_url)
        };

        let options = SqliteConnectOptions::from_str(&url)
            .map_err(|e| AppError::Configuration(format!("Invalid SQLite URL {}: {}", url, e)))?
            .create_if_missing(true);

        Ok(options)
    }
}

#[async_trait]
impl Backend for SqliteBackend {
    async fn connect(config: &DatabaseBackendConfig) -> AppResult<Self> {
        config
            .validate()
            .map_err(|e| AppError::Configuration(format!("Invalid backend config: {}", e)))?;

        let options = Self::connect_options(config)?;

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout));

        // An in-memory database disappears with its last connection
        if config.is_memory_database() {
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to SQLite: {}", e)))?;

        Ok(Self::new(pool))
    }

    async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Health check failed: {}", e)))?;

        Ok(())
    }

    async fn init_schema(&self) -> AppResult<()> {
        super::schema::init_schema(&self.pool).await
    }

    async fn reset_schema(&self) -> AppResult<()> {
        super::schema::drop_schema(&self.pool).await?;
        super::schema::init_schema(&self.pool).await
    }

    async fn cleanup(&self) -> AppResult<()> {
        self.pool.close().await;
        Ok(())
    }
}

#[async_trait]
impl UserBackend for SqliteBackend {
    async fn list_users(&self) -> AppResult<Vec<UserInfo>> {
        self.user_read_ops.find_all_users().await
    }

    async fn find_user_by_id(&self, id: i64) -> AppResult<Option<UserInfo>> {
        self.user_read_ops.find_user_by_id(id).await
    }

    async fn create_user(&self, user: &UserCreationInfo) -> AppResult<i64> {
        self.user_insert_ops.create_user(user).await
    }

    async fn create_users(&self, users: &[UserCreationInfo]) -> AppResult<Vec<i64>> {
        self.user_insert_ops.create_users(users).await
    }

    async fn update_user(&self, user: &UserInfo) -> AppResult<bool> {
        self.user_update_ops.update_user(user).await
    }

    async fn delete_user(&self, id: i64) -> AppResult<Option<UserInfo>> {
        self.user_delete_ops.delete_user(id).await
    }
}
