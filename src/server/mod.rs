//! HTTP front end for the scorer
//!
//! Routes:
//! - `GET /` feedback form
//! - `POST /analyze` `{"feedback": "..."}` -> `{"text", "sentiment", "scores"}`
//! - `GET /health` liveness plus lexicon size
//!
//! The scorer is shared read-only through `Arc<AppState>`, so requests
//! never contend on a lock.

mod error;
mod handlers;
mod state;


pub use error::ApiError;
pub use handlers::{FeedbackRequest, HealthResponse};
pub use state::AppState;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::scoring::SentimentScorer;
use handlers::{analyze_handler, health_handler, index_handler};

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/analyze", post(analyze_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `config` and serve until Ctrl+C or SIGTERM
pub async fn serve(config: &ServerConfig, scorer: SentimentScorer) -> Result<()> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    serve_on(listener, scorer, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve_on<F>(listener: TcpListener, scorer: SentimentScorer, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let entries = scorer.lexicon().len();
    let source = scorer.lexicon().source().to_string();
    let app = router(AppState::new(scorer));

    let local = listener.local_addr().context("Listener has no local address")?;
    info!("Lexicon {} ({} entries)", source, entries);
    info!("Listening on http://{}", local);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
