//! `db` crate — pure persistence layer.
//!
//! Provides a SQLite connection pool, the `friend` row struct, and one
//! repository function per statement run against it. No HTTP concerns live here.

pub mod error;
pub mod pool;
pub mod repository;
pub mod models;

pub use pool::DbPool;
pub use error::DbError;
pub use models::{Friend, FriendFields};
