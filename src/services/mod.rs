pub mod gateway_client;
pub mod relay_service;

pub use gateway_client::{Gateway, HttpGateway};
pub use relay_service::RelayService;
