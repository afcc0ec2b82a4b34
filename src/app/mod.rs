pub mod config;

use axum::{
    handler::Handler,
    routing::{get, post, MethodRouter},
    Router,
};
use std::sync::Arc;

use crate::error::RelayError;
use crate::handlers::{actions, health_handler, payments};
use crate::services::RelayService;

type AppState = Arc<RelayService>;

async fn method_not_allowed() -> RelayError {
    RelayError::MethodNotAllowed
}

/// POST route whose other methods answer 405 with a JSON `detail` body.
fn post_only<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    post(handler).fallback(method_not_allowed)
}

pub fn build_router(service: AppState) -> Router {
    Router::new()
        .route("/", post_only(actions::dispatch))
        .route("/health", get(health_handler))
        .route("/purchase", post_only(payments::initiate_purchase))
        .route("/refund", post_only(payments::refund_purchase))
        .route("/transaction-info", post_only(payments::get_transaction_info))
        .with_state(service)
}
