//! Request-scoped database session.

use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use db::{DbError, DbPool};
use sqlx::{pool::PoolConnection, Sqlite};

use crate::ApiError;

/// A connection checked out of the pool for the lifetime of one request.
///
/// The connection goes back to the pool when the extractor is dropped, which
/// happens once the handler returns, whether it succeeded or not.
pub struct DbSession(pub PoolConnection<Sqlite>);

#[async_trait]
impl<S> FromRequestParts<S> for DbSession
where
    DbPool: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pool = DbPool::from_ref(state);
        let conn = pool.acquire().await.map_err(DbError::from)?;
        Ok(Self(conn))
    }
}
