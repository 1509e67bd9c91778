//! `api` crate — HTTP layer over the `friend` table.
//!
//! Exposes:
//!   POST   /create_friend
//!   GET    /get_friend/{id}
//!   GET    /list_friends
//!   PUT    /update_friend/{id}
//!   DELETE /delete_friend/{id}
//!
//! Every `{id}` route also accepts a trailing slash.

pub mod error;
pub mod handlers;
pub mod session;

pub use error::ApiError;
pub use handlers::AppState;
pub use session::DbSession;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use db::DbPool;
use tower_http::trace::TraceLayer;
use tracing::info;

use handlers::friends;

/// Build the application router with tracing attached.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/create_friend", post(friends::create))
        .route("/get_friend/:id", get(friends::get))
        .route("/get_friend/:id/", get(friends::get))
        .route("/list_friends", get(friends::list))
        .route("/update_friend/:id", put(friends::update))
        .route("/update_friend/:id/", put(friends::update))
        .route("/delete_friend/:id", delete(friends::delete))
        .route("/delete_friend/:id/", delete(friends::delete))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind `bind` and serve the API until Ctrl-C is received.
pub async fn serve(bind: &str, pool: DbPool) -> std::io::Result<()> {
    let app = router(AppState { pool });
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_on(tokio::signal::ctrl_c()))
        .await
}

/// Resolves once `signal` fires. If the signal cannot be installed this never
/// resolves, so the server keeps running instead of stopping at startup.
async fn shutdown_on<F>(signal: F)
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}


#[cfg(test)]
mod shutdown_tests {
    use std::{io, time::Duration};

    use super::shutdown_on;

    #[tokio::test]
    async fn shutdown_completes_when_signal_fires() {
        let fired = async { Ok::<(), io::Error>(()) };
        let done = tokio::time::timeout(Duration::from_millis(100), shutdown_on(fired)).await;
        assert!(done.is_ok());
    }

    #[tokio::test]
    async fn failed_signal_listener_keeps_server_running() {
        let failing = async { Err::<(), _>(io::Error::new(io::ErrorKind::Other, "no signal driver")) };
        let done = tokio::time::timeout(Duration::from_millis(100), shutdown_on(failing)).await;
        assert!(done.is_err());
    }
}
