//! HTTP relay that wraps merchant purchase, refund and lookup calls in the
//! WaafiPay HPP envelope and forwards them to the gateway.

pub mod app;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use app::{build_router, config::Config};
pub use error::{GatewayError, RelayError};
pub use services::{Gateway, HttpGateway, RelayService};
