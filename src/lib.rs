pub mod backend;
pub mod config;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod models;
pub mod resource;
pub mod startup;

// Re-export commonly used types for easier access
pub use error::{AppError, AppResult};
pub use models::{UserCreationInfo, UserInfo};
