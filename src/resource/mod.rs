use std::sync::Arc;

use crate::backend::UserBackend;

pub mod health;
pub mod openapi;
pub mod user;

/// Shared handler state: the configured user backend
pub type AppState = Arc<dyn UserBackend>;
