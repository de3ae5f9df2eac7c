//! # conFusion menu server
//!
//! JSON API over the in-memory menu bank.
//!
//! ## Surface
//!
//! - `GET /dishes`, `GET /dishes/featured`, `GET /dishes/{id}`
//! - `GET /dishes/{id}/neighbors` — circular prev/next over the dish order
//! - `POST /dishes/{id}/comments` — validated comment submission
//! - `GET /promotions`, `GET /promotions/featured`, `GET /promotions/{id}`
//! - `GET /leaders`, `GET /leaders/featured`
//! - `POST /feedback` — validated contact form submission
//!
//! Validation failures come back as `422` with the per-field error map;
//! unknown ids as `404`.
//!
//! ## Configuration
//!
//! - `RUST_PORT` — listen port, default `3001`
//! - `RUST_BANK_PATH` — optional `db.json`-shaped bank file; the built-in
//!   seed is used when unset
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use routes::{
    comments_handler, dish_handler, dishes_handler, featured_dish_handler,
    featured_leader_handler, featured_promotion_handler, feedback_handler, leaders_handler,
    neighbors_handler, promotion_handler, promotions_handler,
};
use state::State;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new();

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/dishes", get(dishes_handler))
        .route("/dishes/featured", get(featured_dish_handler))
        .route("/dishes/{id}", get(dish_handler))
        .route("/dishes/{id}/neighbors", get(neighbors_handler))
        .route("/dishes/{id}/comments", post(comments_handler))
        .route("/promotions", get(promotions_handler))
        .route("/promotions/featured", get(featured_promotion_handler))
        .route("/promotions/{id}", get(promotion_handler))
        .route("/leaders", get(leaders_handler))
        .route("/leaders/featured", get(featured_leader_handler))
        .route("/feedback", post(feedback_handler))
        .layer(cors)
        .with_state(state.clone());

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
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
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
