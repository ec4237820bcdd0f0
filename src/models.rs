use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Maximum login length, matching the `VARCHAR(100)` column
pub const MAX_LOGIN_LENGTH: usize = 100;

/// A row of the `user_info` table
#[derive(Serialize, Deserialize, FromRow, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub login: String,
    #[sqlx(rename = "created_on")]
    pub creation_date: DateTime<Utc>,
}

/// Payload for creating a user; id and creation date are assigned on insert
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct UserCreationInfo {
    pub login: String,
}

impl UserCreationInfo {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_info_json_shape() {
        let user = UserInfo {
            id: 7,
            login: "first_some_user".to_string(),
            creation_date: DateTime::parse_from_rfc3339("2024-01-02T03:04:05Z")
                .unwrap()
                .with_timezone(&Utc),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["login"], "first_some_user");
        assert_eq!(value["creationDate"], "2024-01-02T03:04:05Z");
    }

    #[test]
    fn test_creation_info_requires_login() {
        let parsed: Result<UserCreationInfo, _> = serde_json::from_value(json!({}));
        assert!(parsed.is_err());

        let parsed: UserCreationInfo =
            serde_json::from_value(json!({"login": "some_third_login"})).unwrap();
        assert_eq!(parsed.login, "some_third_login");
    }
}
