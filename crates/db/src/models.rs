//! Row structs that map 1-to-1 onto database tables.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// friend
// ---------------------------------------------------------------------------

/// A persisted friend row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Friend {
    /// Assigned by SQLite on insert; never rewritten.
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

/// The writable columns of a friend row.
///
/// Used both for inserts and for updates, which overwrite every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendFields {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}
