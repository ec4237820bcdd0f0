//! SQLite implementation of the user backend

pub mod backend_impl;
pub mod schema;
pub mod user_delete_impl;
pub mod user_insert_impl;
pub mod user_read_impl;
pub mod user_update_impl;

pub use backend_impl::SqliteBackend;
pub use user_delete_impl::SqliteUserDeleter;
pub use user_insert_impl::SqliteUserInserter;
pub use user_read_impl::SqliteUserReader;
pub use user_update_impl::SqliteUserUpdater;
