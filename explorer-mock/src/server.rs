/// Axum HTTP server setup and routing
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::*;
use crate::store::FixtureStore;

pub fn create_router(store: Arc<FixtureStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Explorer endpoints
        .route("/address/:address/unspent/all", get(get_address_unspent))
        .route("/tx/:txid/hex", get(get_transaction_hex))
        // Fixture helper endpoints
        .route("/fixtures/address", post(add_address_fixture))
        .route("/fixtures/tx", post(add_transaction_fixture))
        .route("/stats", get(get_stats))
        // Shared state
        .with_state(store)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(store: Arc<FixtureStore>, host: String, port: u16) -> anyhow::Result<()> {
    let app = create_router(store);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;

    log::info!("🚀 Explorer mock listening on http://{}", addr);
    log::info!("🧪 Fixture endpoints: POST /fixtures/address, POST /fixtures/tx");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Serve on an already bound listener in a background task
///
/// Returns the bound address and the server task. Tests bind
/// `127.0.0.1:0` and point the client at the returned address.
pub fn spawn_on_listener(
    listener: std::net::TcpListener,
    store: Arc<FixtureStore>,
) -> anyhow::Result<(SocketAddr, JoinHandle<()>)> {
    listener.set_nonblocking(true)?;
    let addr = listener.local_addr()?;
    let listener = TcpListener::from_std(listener)?;
    let app = create_router(store);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            log::error!("Explorer mock stopped: {}", e);
        }
    });

    Ok((addr, handle))
}
