use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::UserInfo;

/// Database-specific adapter for user DELETE operations
#[async_trait]
pub trait UserDeleter: Send + Sync {
    /// Delete the row and return its last state, or `None` if it did not exist
    async fn execute_user_delete(&self, id: i64) -> AppResult<Option<UserInfo>>;
}

/// Unified user DELETE operations using the adapter pattern
pub struct UnifiedUserDeleteOps<T: UserDeleter> {
    deleter: T,
}

impl<T: UserDeleter> UnifiedUserDeleteOps<T> {
    pub fn new(deleter: T) -> Self {
        Self { deleter }
    }

    pub async fn delete_user(&self, id: i64) -> AppResult<Option<UserInfo>> {
        if id < 1 {
            return Ok(None);
        }
        self.deleter.execute_user_delete(id).await
    }
}
