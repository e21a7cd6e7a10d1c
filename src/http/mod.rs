//! HTTP transport: serves both post route groups with axum.
//!
//! Requires the `http` feature.
//!
//! ## Routes
//!
//! - `GET|POST|PUT /filter-posts/`: validation as a per-route filter.
//! - `GET|POST|PUT /pipeline-behavior-posts/`: validation as a mediator
//!   pipeline stage, failures mapped by the boundary.
//! - `GET /health`: `{ "ok": true, "requests": [...] }`.
//!
//! ## Example
//!
//! ```ignore
//! use posts_pipeline::http::{self, AppState};
//! use posts_pipeline::problem::Environment;
//!
//! let state = AppState::standard(Environment::Development);
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(state.clone());
//!
//! // Or serve directly
//! http::serve(state, "127.0.0.1:5000").await?;
//! ```

mod boundary;
mod filter;
mod filter_posts;
mod pipeline_posts;
mod state;

pub use boundary::{boundary, RequestContext, TraceId, TRACE_ID_HEADER};
pub use filter::{Payload, Validated};
pub use filter_posts::CreatedPost;
pub use state::AppState;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{middleware, Json, Router};
use serde_json::json;
use tokio::net::ToSocketAddrs;

/// Build the axum `Router` for both post groups.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(filter_posts::routes())
        .merge(pipeline_posts::routes())
        .layer(middleware::from_fn_with_state(state.mapper, boundary))
        .with_state(state)
}

/// Serve the router at `addr` until Ctrl-C.
pub async fn serve(state: AppState, addr: impl ToSocketAddrs) -> Result<(), std::io::Error> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

/// `GET /health`: returns `{ "ok": true, "requests": [...] }`.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mut requests = state.mediator.requests();
    requests.sort_unstable();
    Json(json!({ "ok": true, "requests": requests }))
}
