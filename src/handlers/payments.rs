use axum::{body::Bytes, extract::State, response::Json};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

use crate::error::RelayError;
use crate::models::{PurchaseRequest, RefundRequest, TransactionInfoRequest};
use crate::services::RelayService;

/// Reads the raw body as JSON whatever its Content-Type header says.
pub(crate) fn read_json(body: &Bytes) -> Result<Value, RelayError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!("Unreadable request body: {}", e);
        RelayError::MalformedBody(e)
    })
}

/// Rejects a body before any envelope is built.
pub(crate) fn parse_body<T: DeserializeOwned>(payload: Value) -> Result<T, RelayError> {
    serde_json::from_value(payload).map_err(|e| {
        warn!("Invalid request body: {}", e);
        RelayError::Validation(e.to_string())
    })
}

pub async fn initiate_purchase(
    State(service): State<Arc<RelayService>>,
    body: Bytes,
) -> Result<Json<Value>, RelayError> {
    let request: PurchaseRequest = parse_body(read_json(&body)?)?;
    service.initiate_purchase(request).await.map(Json)
}

pub async fn refund_purchase(
    State(service): State<Arc<RelayService>>,
    body: Bytes,
) -> Result<Json<Value>, RelayError> {
    let request: RefundRequest = parse_body(read_json(&body)?)?;
    service.refund_purchase(request).await.map(Json)
}

pub async fn get_transaction_info(
    State(service): State<Arc<RelayService>>,
    body: Bytes,
) -> Result<Json<Value>, RelayError> {
    let request: TransactionInfoRequest = parse_body(read_json(&body)?)?;
    service.get_transaction_info(request).await.map(Json)
}
