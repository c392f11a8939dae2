//! HTTP server implementation using Axum.

use crate::handler::{create_person, delete_person, handle_health, list_persons, update_person};
use crate::store::PersonStore;
use axum::{
    routing::{get, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Application state shared across handlers.
#[derive(Default)]
pub struct AppState {
    /// Person collection
    pub store: RwLock<PersonStore>,
}

/// Build the router for the persons API.
pub fn router(state: Arc<AppState>) -> Router {
    // Configure CORS for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/persons", get(list_persons).post(create_person))
        .route("/persons/:id", put(update_person).delete(delete_person))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the persons HTTP server.
///
/// Returns the actual address the server is bound to (useful when port=0).
pub async fn start_server(
    state: Arc<AppState>,
    host: &str,
    port: u16,
) -> anyhow::Result<SocketAddr> {
    let app = router(state);

    // Parse the address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    // Bind to the address
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    info!("Server listening on {}", actual_addr);

    // Spawn the server in the background
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
        }
    });

    Ok(actual_addr)
}
