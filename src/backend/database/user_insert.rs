use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::{AppError, AppResult};
use crate::models::{UserCreationInfo, MAX_LOGIN_LENGTH};

/// Prepared user data for database insertion
#[derive(Debug, Clone)]
pub struct PreparedUserData {
    pub login: String,
    pub created_on: DateTime<Utc>,
}

/// Database-specific adapter for user INSERT operations
#[async_trait]
pub trait UserInserter: Send + Sync {
    /// Execute a single-row insert and return the generated id
    async fn execute_user_insert(&self, data: PreparedUserData) -> AppResult<i64>;

    /// Execute one multi-row insert and return the generated ids
    async fn execute_users_insert(&self, data: Vec<PreparedUserData>) -> AppResult<Vec<i64>>;
}

/// Shared business logic for user INSERT operations
pub struct UserInsertProcessor;

impl UserInsertProcessor {
    /// Prepare user data for database insertion
    ///
    /// Validates the login and stamps the creation time.
    pub fn prepare_user_for_insert(user: &UserCreationInfo) -> AppResult<PreparedUserData> {
        Self::prepare_with_timestamp(user, Utc::now())
    }

    /// Prepare several users sharing one creation timestamp
    pub fn prepare_users_for_insert(
        users: &[UserCreationInfo],
    ) -> AppResult<Vec<PreparedUserData>> {
        let timestamp = Utc::now();
        users
            .iter()
            .map(|user| Self::prepare_with_timestamp(user, timestamp))
            .collect()
    }

    fn prepare_with_timestamp(
        user: &UserCreationInfo,
        timestamp: DateTime<Utc>,
    ) -> AppResult<PreparedUserData> {
        validate_login(&user.login)?;

        Ok(PreparedUserData {
            login: user.login.clone(),
            created_on: timestamp,
        })
    }
}

/// Reject blank logins and logins longer than the column allows
pub fn validate_login(login: &str) -> AppResult<()> {
    if login.trim().is_empty() {
        return Err(AppError::BadRequest("Login is required".to_string()));
    }

    if login.chars().count() > MAX_LOGIN_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Login must be at most {} characters",
            MAX_LOGIN_LENGTH
        )));
    }

    Ok(())
}

/// Unified user INSERT operations using the adapter pattern
pub struct UnifiedUserInsertOps<T: UserInserter> {
    inserter: T,
}

impl<T: UserInserter> UnifiedUserInsertOps<T> {
    pub fn new(inserter: T) -> Self {
        Self { inserter }
    }

    pub async fn create_user(&self, user: &UserCreationInfo) -> AppResult<i64> {
        let prepared_data = UserInsertProcessor::prepare_user_for_insert(user)?;

        self.inserter.execute_user_insert(prepared_data).await
    }

    pub async fn create_users(&self, users: &[UserCreationInfo]) -> AppResult<Vec<i64>> {
        if users.is_empty() {
            return Ok(Vec::new());
        }

        let prepared_data = UserInsertProcessor::prepare_users_for_insert(users)?;

        self.inserter.execute_users_insert(prepared_data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_user_for_insert() {
        let user = UserCreationInfo::new("first_some_user");

        let prepared = UserInsertProcessor::prepare_user_for_insert(&user).unwrap();
        assert_eq!(prepared.login, "first_some_user");
        assert!(prepared.created_on > Utc::now() - chrono::Duration::seconds(1));
    }

    #[test]
    fn test_prepare_users_share_timestamp() {
        let users = vec![
            UserCreationInfo::new("first_some_user"),
            UserCreationInfo::new("second_some_user"),
        ];

        let prepared = UserInsertProcessor::prepare_users_for_insert(&users).unwrap();
        assert_eq!(prepared.len(), 2);
        assert_eq!(prepared[0].created_on, prepared[1].created_on);
    }

    #[test]
    fn test_validate_login() {
        assert!(validate_login("some_third_login").is_ok());
        assert!(validate_login(&"a".repeat(MAX_LOGIN_LENGTH)).is_ok());

        assert!(validate_login("").is_err());
        assert!(validate_login("   ").is_err());
        assert!(validate_login(&"a".repeat(MAX_LOGIN_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_one_invalid_login_rejects_batch() {
        let users = vec![
            UserCreationInfo::new("first_some_user"),
            UserCreationInfo::new(""),
        ];

        assert!(UserInsertProcessor::prepare_users_for_insert(&users).is_err());
    }
}
