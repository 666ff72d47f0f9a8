//! HTTP handlers for the transaction and statistics endpoints
//!
//! Handlers validate input, call the store and map the outcome to a status
//! code. Only `GET /estatistica` returns a body.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use tracing::{debug, error};

use super::dto::{convert_rejection, convert_request, StatisticsResponse, TransactionRequest};
use crate::core::StatisticsStore;
use crate::types::ServiceError;

/// Shared state injected into every handler
#[derive(Clone)]
pub struct AppState {
    /// The process-wide transaction store
    pub store: Arc<dyn StatisticsStore>,
}

impl AppState {
    /// Wrap a store for use as router state
    pub fn new(store: Arc<dyn StatisticsStore>) -> Self {
        Self { store }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_client_error() {
            debug!(status = status.as_u16(), "Request rejected: {}", self);
        } else {
            error!(status = status.as_u16(), "Request failed: {}", self);
        }
        status.into_response()
    }
}

/// `POST /transacao`
///
/// Returns 201 once the transaction is stored, 422 when validation fails and
/// 400 when the body is not JSON.
pub async fn create_transaction(
    State(state): State<AppState>,
    payload: Result<Json<TransactionRequest>, JsonRejection>,
) -> Result<StatusCode, ServiceError> {
    let Json(request) = payload.map_err(convert_rejection)?;
    let transaction = convert_request(request, Utc::now())?;

    state.store.add(transaction);
    debug!(
        amount = transaction.amount,
        timestamp = %transaction.timestamp,
        "Transaction recorded"
    );

    Ok(StatusCode::CREATED)
}

/// `DELETE /transacao`
pub async fn clear_transactions(State(state): State<AppState>) -> StatusCode {
    state.store.clear();
    debug!("All transactions cleared");
    StatusCode::OK
}

/// `GET /estatistica`
pub async fn get_statistics(State(state): State<AppState>) -> Json<StatisticsResponse> {
    let stats = state.store.statistics(Utc::now());
    Json(StatisticsResponse::from(stats))
}
