//! Repository functions — one function per database operation.
//!
//! Every function takes the caller's `&mut SqliteConnection` (a scoped
//! session checked out of the pool) and returns a `Result<T, DbError>`.
//! No business logic — pure SQL.

pub mod friends;
