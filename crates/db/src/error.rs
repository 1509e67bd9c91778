//! Error type shared by the pool and repository modules.

use thiserror::Error;

/// Failures surfaced by the persistence layer.
///
/// `NotFound` is the only variant callers are expected to recover from;
/// the others mean the storage engine itself is unusable.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// An update or delete matched no `friend` row with this id.
    #[error("no friend row with id {0}")]
    NotFound(i64),

    #[error("schema migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
