//! # Art Collection Search
//!
//! Search interface over the Metropolitan Museum of Art public collection API.
//!
//! The crate has two halves:
//! - A small axum server exposing two read-only proxy endpoints,
//!   `/api/object/{id}` and `/api/search/{query}`, which forward to the
//!   remote collection API and relay its JSON bodies verbatim.
//! - The [`client`] module, holding the session-side components (debounced
//!   search bar, page controller, batched result loader, image viewer) as
//!   plain state machines driven through the proxy endpoints.
//!
//!
//!
//! ## Proxy
//!
//! The frontend never talks to the collection API directly. Routing every
//! request through our endpoints keeps the remote base URL in one place,
//! gives the browser a same-origin target, and collapses every remote
//! failure into one fixed error shape.
//!
//! The cost is an extra hop per request. The remote API dominates total
//! latency by orders of magnitude, so the hop is noise.
//!
//!
//!
//! ## Remote API
//!
//! Two read endpoints are used, both unauthenticated:
//! ```sh
//! curl https://collectionapi.metmuseum.org/public/collection/v1/objects/436535
//! curl "https://collectionapi.metmuseum.org/public/collection/v1/search?q=sunflowers"
//! ```
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod client;
pub mod collection;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use routes::{object_handler, search_handler};
use state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/object/{id}", get(object_handler))
        .route("/api/search/{query}", get(search_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new();

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
