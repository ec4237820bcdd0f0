use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use super::AppState;
use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::models::{UserCreationInfo, UserInfo};

// Each handler performs one backend call. If the client goes away, hyper
// drops the handler future and the pending query with it; a write the
// store already committed stays committed.

/// GET /users/list
#[utoipa::path(
    get,
    path = "/users/list",
    tag = "users",
    responses(
        (status = 200, description = "Every stored user", body = [UserInfo]),
    )
)]
pub async fn list_users(State(backend): State<AppState>) -> Result<Json<Vec<UserInfo>>, AppError> {
    let users = backend.list_users().await?;
    Ok(Json(users))
}

/// GET /users/{id}
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The stored user", body = UserInfo),
        (status = 404, description = "No such user, body is the requested id", body = i64),
    )
)]
pub async fn get_user(
    State(backend): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserInfo>, AppError> {
    backend
        .find_user_by_id(user_id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(user_id))
}

/// POST /users, responds with the new id
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = UserCreationInfo,
    responses(
        (status = 200, description = "Id assigned to the new user", body = i64),
        (status = 400, description = "Missing or invalid login"),
    )
)]
pub async fn create_user(
    State(backend): State<AppState>,
    ApiJson(user): ApiJson<UserCreationInfo>,
) -> Result<Json<i64>, AppError> {
    let id = backend.create_user(&user).await?;
    debug!(id, login = %user.login, "created user");
    Ok(Json(id))
}

/// PUT /users
///
/// Only the login is written; a missing id is reported as 404.
#[utoipa::path(
    put,
    path = "/users",
    tag = "users",
    request_body = UserInfo,
    responses(
        (status = 200, description = "Login updated"),
        (status = 400, description = "Missing or invalid login"),
        (status = 404, description = "No such user, body is the requested id", body = i64),
    )
)]
pub async fn update_user(
    State(backend): State<AppState>,
    ApiJson(user): ApiJson<UserInfo>,
) -> Result<StatusCode, AppError> {
    if backend.update_user(&user).await? {
        Ok(StatusCode::OK)
    } else {
        Err(AppError::NotFound(user.id))
    }
}

/// DELETE /users/{id}, responds with the deleted record
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The record as it was before deletion", body = UserInfo),
        (status = 404, description = "No such user, body is the requested id", body = i64),
    )
)]
pub async fn delete_user(
    State(backend): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserInfo>, AppError> {
    let deleted = backend
        .delete_user(user_id)
        .await?
        .ok_or(AppError::NotFound(user_id))?;
    debug!(id = user_id, "deleted user");
    Ok(Json(deleted))
}
