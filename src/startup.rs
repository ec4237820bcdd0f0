use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tracing::info;

use crate::backend::{BackendFactory, UserBackend};
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::logging::logging_middleware;
use crate::models::{UserCreationInfo, UserInfo};
use crate::resource;

/// Logins inserted by the demo walkthrough
pub const SEED_LOGINS: [&str; 3] = ["first_some_user", "second_some_user", "some_third_login"];

/// Connect to the configured store and make sure the user table exists
pub async fn setup_backend(config: &AppConfig) -> AppResult<Arc<dyn UserBackend>> {
    let backend_config = config.backend_config()?;

    info!(
        "Setting up {} backend ({} connections max)",
        config.database.db_type, backend_config.max_connections
    );

    let backend = BackendFactory::create(&backend_config).await?;

    if config.database.reset_on_startup {
        backend.reset_schema().await?;
        info!("Recreated user table");
    } else {
        backend.init_schema().await?;
        info!("User table ready");
    }

    Ok(backend)
}

/// Build the HTTP router over a backend
pub fn build_router(backend: Arc<dyn UserBackend>) -> Router {
    Router::new()
        .route("/health", get(resource::health::health))
        .route("/api-docs/openapi.json", get(resource::openapi::openapi_json))
        .route("/users/list", get(resource::user::list_users))
        .route(
            "/users",
            post(resource::user::create_user).put(resource::user::update_user),
        )
        .route(
            "/users/{id}",
            get(resource::user::get_user).delete(resource::user::delete_user),
        )
        .layer(middleware::from_fn(logging_middleware))
        .with_state(backend)
}

/// Reset the table, insert the seed logins with one statement, read everything back
pub async fn run_demo(backend: &dyn UserBackend) -> AppResult<Vec<UserInfo>> {
    backend.reset_schema().await?;

    let seeds: Vec<UserCreationInfo> = SEED_LOGINS
        .iter()
        .map(|login| UserCreationInfo::new(*login))
        .collect();
    let ids = backend.create_users(&seeds).await?;
    info!("Inserted {} users", ids.len());

    backend.list_users().await
}
