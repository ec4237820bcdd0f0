use crate::error::AppResult;
use crate::models::{UserCreationInfo, UserInfo};
use async_trait::async_trait;
use std::sync::Arc;

pub mod database;

/// Supported database backend types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DatabaseType {
    PostgreSQL,
    SQLite,
}

impl DatabaseType {
    /// Parse the `type` value used in configuration files
    pub fn from_config_name(name: &str) -> Option<Self> {
        match name {
            "postgresql" | "postgres" => Some(DatabaseType::PostgreSQL),
            "sqlite" => Some(DatabaseType::SQLite),
            _ => None,
        }
    }
}

/// Lifecycle of a storage backend
///
/// Every implementation owns a connection pool; each operation borrows a
/// connection for a single statement and returns it, so no state survives
/// between calls.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Connect and initialize the storage backend
    async fn connect(config: &crate::backend::database::DatabaseBackendConfig) -> AppResult<Self>
    where
        Self: Sized;

    /// Check if the storage backend is healthy and accessible
    async fn health_check(&self) -> AppResult<()>;

    /// Create the `user_info` table if it does not exist yet
    async fn init_schema(&self) -> AppResult<()>;

    /// Drop and recreate the `user_info` table
    async fn reset_schema(&self) -> AppResult<()>;

    /// Clean up resources when storage is no longer needed
    async fn cleanup(&self) -> AppResult<()> {
        Ok(())
    }
}

/// User record operations
///
/// Absence is reported as `None` (or `false` for updates), never as an
/// error; errors are store failures only, apart from login validation.
#[async_trait]
pub trait UserBackend: Backend {
    /// All users, in ascending id order
    async fn list_users(&self) -> AppResult<Vec<UserInfo>>;

    async fn find_user_by_id(&self, id: i64) -> AppResult<Option<UserInfo>>;

    /// Insert a user and return its store-assigned id
    async fn create_user(&self, user: &UserCreationInfo) -> AppResult<i64>;

    /// Insert several users with one multi-row statement
    async fn create_users(&self, users: &[UserCreationInfo]) -> AppResult<Vec<i64>>;

    /// Overwrite the login of the user with `user.id`
    ///
    /// Returns `false` when no such user exists.
    async fn update_user(&self, user: &UserInfo) -> AppResult<bool>;

    /// Delete a user and return the state it had just before deletion
    async fn delete_user(&self, id: i64) -> AppResult<Option<UserInfo>>;
}

/// Factory for creating backend instances
pub struct BackendFactory;

impl BackendFactory {
    /// Create a backend based on configuration
    pub async fn create(
        config: &crate::backend::database::DatabaseBackendConfig,
    ) -> AppResult<Arc<dyn UserBackend>> {
        let backend = Self::create_backend(config).await?;
        Ok(Arc::from(backend))
    }

    /// Create a backend based on configuration (returns Box)
    pub async fn create_backend(
        config: &crate::backend::database::DatabaseBackendConfig,
    ) -> AppResult<Box<dyn UserBackend>> {
        match config.database_type {
            DatabaseType::PostgreSQL => {
                let backend =
                    crate::backend::database::postgres::PostgresBackend::connect(config).await?;
                Ok(Box::new(backend))
            }
            DatabaseType::SQLite => {
                let backend =
                    crate::backend::database::sqlite::SqliteBackend::connect(config).await?;
                Ok(Box::new(backend))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_type_from_config_name() {
        assert_eq!(
            DatabaseType::from_config_name("postgresql"),
            Some(DatabaseType::PostgreSQL)
        );
        assert_eq!(
            DatabaseType::from_config_name("postgres"),
            Some(DatabaseType::PostgreSQL)
        );
        assert_eq!(
            DatabaseType::from_config_name("sqlite"),
            Some(DatabaseType::SQLite)
        );
        assert_eq!(DatabaseType::from_config_name("oracle"), None);
    }
}
