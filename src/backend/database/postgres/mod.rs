//! PostgreSQL implementation of the user backend

pub mod backend_impl;
pub mod schema;
pub mod user_delete_impl;
pub mod user_insert_impl;
pub mod user_read_impl;
pub mod user_update_impl;

pub use backend_impl::PostgresBackend;
pub use user_delete_impl::PostgresUserDeleter;
pub use user_insert_impl::PostgresUserInserter;
pub use user_read_impl::PostgresUserReader;
pub use user_update_impl::PostgresUserUpdater;
