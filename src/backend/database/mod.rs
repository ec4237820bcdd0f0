//! Database abstraction layer
//!
//! This module provides a unified interface for user operations across
//! PostgreSQL and SQLite while keeping the SQL of each store separate.
//!
//! # Architecture
//!
//! ```text
//! Common Logic (user_insert.rs, user_update.rs, ...)
//!     ↓
//! Database-specific implementations
//!     ├── postgres/ (PostgreSQL-specific code)
//!     └── sqlite/   (SQLite-specific code)
//! ```

pub mod config;
pub mod postgres;
pub mod sqlite;
pub mod user_delete;
pub mod user_insert;
pub mod user_read;
pub mod user_update;

/// Table holding user records
pub const USER_TABLE: &str = "user_info";

pub use config::DatabaseBackendConfig;

pub use user_delete::UnifiedUserDeleteOps;

pub use user_insert::UnifiedUserInsertOps;

pub use user_read::UnifiedUserReadOps;

pub use user_update::UnifiedUserUpdateOps;

pub use postgres::{
    PostgresBackend, PostgresUserDeleter, PostgresUserInserter, PostgresUserReader,
    PostgresUserUpdater,
};
pub use sqlite::{
    SqliteBackend, SqliteUserDeleter, SqliteUserInserter, SqliteUserReader, SqliteUserUpdater,
};
