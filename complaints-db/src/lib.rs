//! Storage layer for utility customer-complaint records.
//!
//! Users specialize into persons (optionally employees) or companies through
//! rows that share the user id. Complaints reference a user and a reason and
//! collect recalls. Cascades and the deletion log live in the embedded
//! migrations, not in this crate's code.

pub mod models;
pub mod orm;
pub mod schema;

pub use orm::{MIGRATIONS, establish_connection, run_pending_migrations};
