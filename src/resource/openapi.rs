use axum::Json;
use utoipa::OpenApi;

use super::user;
use crate::models::{UserCreationInfo, UserInfo};

/// OpenAPI description of the user endpoints
#[derive(OpenApi)]
#[openapi(
    info(title = "user-info-server", description = "CRUD over the user_info table"),
    paths(
        user::list_users,
        user::get_user,
        user::create_user,
        user::update_user,
        user::delete_user,
    ),
    components(schemas(UserInfo, UserCreationInfo)),
    tags((name = "users", description = "User info records"))
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_responses_document_id_body() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

        for method in ["get", "delete"] {
            let not_found = &doc["paths"]["/users/{id}"][method]["responses"]["404"];
            assert_eq!(
                not_found["content"]["application/json"]["schema"]["type"],
                "integer",
                "{} /users/{{id}}",
                method
            );
        }
        assert!(doc["components"]["schemas"]["UserInfo"]["properties"]["creationDate"].is_object());
    }
}
