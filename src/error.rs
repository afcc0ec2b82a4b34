use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::models::ServiceName;

pub const METHOD_NOT_ALLOWED_DETAIL: &str = "Method not allowed. Use POST.";

pub const INVALID_ACTION_DETAIL: &str =
    "Invalid action. Use \"purchase\", \"withdraw\", \"refund\", or \"info\".";

/// Outcome of a single outbound call, before it is tied to an operation.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway answered with HTTP {0}")]
    Status(StatusCode),
    #[error("gateway timed out: {0}")]
    Timeout(#[source] reqwest::Error),
    #[error("gateway unreachable: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("gateway returned a non-JSON body: {0}")]
    InvalidBody(#[source] reqwest::Error),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout(err)
        } else if err.is_decode() {
            GatewayError::InvalidBody(err)
        } else {
            GatewayError::Transport(err)
        }
    }
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{} (upstream HTTP {status})", .operation.error_detail())]
    Gateway {
        status: StatusCode,
        operation: ServiceName,
    },
    #[error("{operation} call failed: {source}")]
    Upstream {
        operation: ServiceName,
        #[source]
        source: GatewayError,
    },
    #[error("unreadable request body: {0}")]
    MalformedBody(#[source] serde_json::Error),
    #[error("invalid request body: {0}")]
    Validation(String),
    #[error("invalid action {0:?}")]
    InvalidAction(String),
    #[error("method not allowed")]
    MethodNotAllowed,
}

impl RelayError {
    pub fn from_gateway(operation: ServiceName, err: GatewayError) -> Self {
        match err {
            GatewayError::Status(status) => RelayError::Gateway { status, operation },
            source => RelayError::Upstream { operation, source },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::Gateway { status, .. } => *status,
            RelayError::Upstream { source, .. } => match source {
                GatewayError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
                _ => StatusCode::BAD_GATEWAY,
            },
            RelayError::MalformedBody(_) | RelayError::Validation(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            RelayError::InvalidAction(_) => StatusCode::BAD_REQUEST,
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            RelayError::Gateway { operation, .. } => operation.error_detail().to_string(),
            RelayError::Upstream { source, .. } => match source {
                GatewayError::Timeout(_) => "WaafiPay gateway timed out".to_string(),
                GatewayError::InvalidBody(_) => "WaafiPay returned an invalid response".to_string(),
                _ => "WaafiPay gateway unreachable".to_string(),
            },
            RelayError::MalformedBody(e) => format!("JSON decode error: {e}"),
            RelayError::Validation(msg) => msg.clone(),
            RelayError::InvalidAction(_) => INVALID_ACTION_DETAIL.to_string(),
            RelayError::MethodNotAllowed => METHOD_NOT_ALLOWED_DETAIL.to_string(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.detail() }))).into_response()
    }
}
