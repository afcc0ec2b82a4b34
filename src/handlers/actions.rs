use axum::{body::Bytes, extract::State, response::Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use super::payments::{parse_body, read_json};
use crate::error::RelayError;
use crate::services::RelayService;

/// Single-endpoint form: the operation is chosen by the body's `action` field.
pub async fn dispatch(
    State(service): State<Arc<RelayService>>,
    body: Bytes,
) -> Result<Json<Value>, RelayError> {
    let payload = read_json(&body)?;
    let action = payload
        .get("action")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_lowercase();

    info!("Dispatching action {:?}", action);

    let body = match action.as_str() {
        "purchase" => service.initiate_purchase(parse_body(payload)?).await?,
        "withdraw" | "refund" => service.refund_purchase(parse_body(payload)?).await?,
        "info" | "transaction-info" => service.get_transaction_info(parse_body(payload)?).await?,
        _ => {
            warn!("Unknown action {:?}", action);
            return Err(RelayError::InvalidAction(action));
        }
    };

    Ok(Json(body))
}
