use async_trait::async_trait;

use super::user_insert::validate_login;
use crate::error::AppResult;
use crate::models::UserInfo;

/// Common trait for user update operations across different database backends
#[async_trait]
pub trait UserUpdater: Send + Sync {
    /// Execute the update and report whether a row matched
    async fn execute_user_update(&self, data: PreparedUserUpdateData) -> AppResult<bool>;
}

/// Prepared user data for database update operations
///
/// Only the login is mutable; the creation date of the stored row is kept.
#[derive(Debug, Clone)]
pub struct PreparedUserUpdateData {
    pub id: i64,
    pub login: String,
}

/// Processor for common user update business logic
pub struct UserUpdateProcessor;

impl UserUpdateProcessor {
    pub fn prepare_user_for_update(user: &UserInfo) -> AppResult<PreparedUserUpdateData> {
        validate_login(&user.login)?;

        Ok(PreparedUserUpdateData {
            id: user.id,
            login: user.login.clone(),
        })
    }
}

/// Unified user UPDATE operations using the adapter pattern
pub struct UnifiedUserUpdateOps<T: UserUpdater> {
    updater: T,
}

impl<T: UserUpdater> UnifiedUserUpdateOps<T> {
    pub fn new(updater: T) -> Self {
        Self { updater }
    }

    pub async fn update_user(&self, user: &UserInfo) -> AppResult<bool> {
        let prepared_data = UserUpdateProcessor::prepare_user_for_update(user)?;

        if prepared_data.id < 1 {
            return Ok(false);
        }

        self.updater.execute_user_update(prepared_data).await
    }
}
