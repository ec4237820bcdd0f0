//! User read operations
//!
//! This module provides common interfaces for user read operations
//! that work across different database backends.

use crate::error::AppResult;
use crate::models::UserInfo;
use async_trait::async_trait;

/// Trait for user read operations
#[async_trait]
pub trait UserReader: Send + Sync {
    /// Find a user by ID
    async fn find_user_by_id(&self, id: i64) -> AppResult<Option<UserInfo>>;

    /// Find all users
    async fn find_all_users(&self) -> AppResult<Vec<UserInfo>>;
}

/// Unified user read operations
pub struct UnifiedUserReadOps<T: UserReader> {
    reader: T,
}

impl<T: UserReader> UnifiedUserReadOps<T> {
    pub fn new(reader: T) -> Self {
        Self { reader }
    }

    /// Find a user by ID
    ///
    /// Store-generated ids start at 1, so smaller ids are answered without
    /// a round trip.
    pub async fn find_user_by_id(&self, id: i64) -> AppResult<Option<UserInfo>> {
        if id < 1 {
            return Ok(None);
        }
        self.reader.find_user_by_id(id).await
    }

    pub async fn find_all_users(&self) -> AppResult<Vec<UserInfo>> {
        self.reader.find_all_users().await
    }
}
