//! Request handlers and the shared router state.

pub mod friends;

use axum::extract::FromRef;
use db::DbPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}

impl FromRef<AppState> for DbPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}
