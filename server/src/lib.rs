//! # Feedback Service
//!
//! HTTP backend collecting user feedback (name, email, optional phone) into a
//! Postgres table.
//!
//!
//!
//! # Endpoint
//!
//! `POST /api/submit-feedback`
//! - Request body: `{ "name": string, "email": string, "phone"?: string }`
//! - Response body, always: `{ "success": bool, "message": string }`
//! - 200 on success, 400 on validation failure, 405 on any other method,
//!   500 on a storage error
//!
//!
//!
//! # Configuration
//!
//! - `RUST_PORT`: listen port, defaults to 8080
//! - `DATABASE_URL`: Postgres connection string, read from the environment or
//!   from `/run/secrets/DATABASE_URL`. TLS to the database is required.
//! - `RUST_LOG`: tracing filter, e.g. `info`
//!
//!
//!
//! # Storage
//!
//! One `feedback` table, created on demand so the service can be pointed at
//! an empty database. Connections are scoped to a single request; there is no
//! pool and no shared state between requests beyond the loaded config.

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::post,
};

use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod routes;
pub mod state;
pub mod utils;

use routes::{feedback_handler, method_not_allowed_handler};
use state::State;

pub fn app(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(
            "/api/submit-feedback",
            post(feedback_handler).fallback(method_not_allowed_handler),
        )
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading configuration...");
    let state = State::new();

    info!("Starting server...");
    let app = app(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
