/// Axum HTTP handlers for the explorer API endpoints
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::store::FixtureStore;
use crate::types::*;

/// Shared application state
pub type AppState = Arc<FixtureStore>;

/// Custom error type for handlers
pub enum ApiError {
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        (status, message).into_response()
    }
}

/// GET /address/{address}/unspent/all
/// Returns all unspent outputs of an address (empty result when unknown)
pub async fn get_address_unspent(
    State(store): State<AppState>,
    Path(address): Path<String>,
) -> Json<UnspentResponse> {
    store.record_request(&format!("/address/{}/unspent/all", address));

    let result = store.unspent(&address);
    log::debug!("{} unspent outputs for {}", result.len(), address);

    Json(UnspentResponse {
        address,
        script: String::new(),
        result,
        error: String::new(),
    })
}

/// GET /tx/{txid}/hex
/// Returns raw transaction hex as plain text
pub async fn get_transaction_hex(
    State(store): State<AppState>,
    Path(txid): Path<String>,
) -> Result<String, ApiError> {
    store.record_request(&format!("/tx/{}/hex", txid));

    store
        .transaction_hex(&txid)
        .ok_or_else(|| ApiError::NotFound(format!("Transaction not found: {}", txid)))
}

// ============================================================================
// FIXTURE HELPER ENDPOINTS (not part of the explorer API)
// ============================================================================

/// POST /fixtures/address
/// Register (or replace) the unspent outputs of an address
pub async fn add_address_fixture(
    State(store): State<AppState>,
    Json(fixture): Json<AddressFixture>,
) -> StatusCode {
    log::info!(
        "Registering {} unspent outputs for {}",
        fixture.utxos.len(),
        fixture.address
    );
    store.add_address(fixture.address, fixture.utxos);
    StatusCode::CREATED
}

/// POST /fixtures/tx
/// Register a raw transaction
pub async fn add_transaction_fixture(
    State(store): State<AppState>,
    Json(fixture): Json<TransactionFixture>,
) -> StatusCode {
    log::info!("Registering transaction {}", fixture.txid);
    store.add_transaction(fixture.txid, fixture.hex);
    StatusCode::CREATED
}

/// GET /stats
/// Request counts per path
pub async fn get_stats(State(store): State<AppState>) -> Json<HashMap<String, u64>> {
    Json(store.request_counts())
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}
