//! ScholarQA Server
//!
//! An axum API that fronts the retrieval engine and the QA inference
//! service: it turns a question into candidate passages, runs answer
//! extraction over each, and pairs the answers with source DOIs. Optionally
//! serves the built frontend.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod routes;
mod state;
mod upstream;

use config::ServerConfig;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scholarqa_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    let state = AppState::new(&config);

    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Question answering
        .route("/api/qa/ask", post(routes::qa::ask))
        .route("/api/qa/query", get(routes::qa::query_candidate))
        .route("/api/qa/statistics", get(routes::qa::statistics))
        // Liveness
        .route("/healthz", get(routes::health::healthz))
        // Apply middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let app = config.frontend.attach(app);

    // Start server
    tracing::info!("Starting server on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
