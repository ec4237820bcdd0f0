use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use super::super::config::DatabaseBackendConfig;
use super::{PostgresUserDeleter, PostgresUserInserter, PostgresUserReader, PostgresUserUpdater};
use crate::backend::database::{
    UnifiedUserDeleteOps, UnifiedUserInsertOps, UnifiedUserReadOps, UnifiedUserUpdateOps,
};
use crate::backend::{Backend, UserBackend};
use crate::error::{AppError, AppResult};
use crate::models::{UserCreationInfo, UserInfo};

/// PostgreSQL database backend implementation
pub struct PostgresBackend {
    pool: PgPool,
    user_insert_ops: UnifiedUserInsertOps<PostgresUserInserter>,
    user_update_ops: UnifiedUserUpdateOps<PostgresUserUpdater>,
    user_delete_ops: UnifiedUserDeleteOps<PostgresUserDeleter>,
    user_read_ops: UnifiedUserReadOps<PostgresUserReader>,
}

impl PostgresBackend {
    /// Create a new PostgreSQL backend instance
    pub fn new(pool: PgPool) -> Self {
        let user_inserter = PostgresUserInserter::new(pool.clone());
        let user_updater = PostgresUserUpdater::new(pool.clone());
        let user_deleter = PostgresUserDeleter::new(pool.clone());
        let user_reader = PostgresUserReader::new(pool.clone());

        Self {
            pool,
            user_insert_ops: UnifiedUserInsertOps::new(user_inserter),
            user_update_ops: UnifiedUserUpdateOps::new(user_updater),
            user_delete_ops: UnifiedUserDeleteOps::new(user_deleter),
            user_read_ops: UnifiedUserReadOps::new(user_reader),
        }
    }
}

#[async_trait]
impl Backend for PostgresBackend {
    async fn connect(config: &DatabaseBackendConfig) -> AppResult<Self> {
        config
            .validate()
            .map_err(|e| AppError::Configuration(format!("Invalid backend config: {}", e)))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(&config.connection_url)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to PostgreSQL: {}", e)))?;

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
impl UserBackend for PostgresBackend {
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
