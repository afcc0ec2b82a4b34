use async_trait::async_trait;
use axum::http::StatusCode;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::app::config::Config;
use crate::error::GatewayError;
use crate::models::Envelope;

/// Anything that can deliver an envelope to the payment gateway.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Returns the upstream JSON body when the gateway answers HTTP 200.
    async fn send(&self, envelope: &Envelope) -> Result<Value, GatewayError>;
}

pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

impl HttpGateway {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.gateway_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn send(&self, envelope: &Envelope) -> Result<Value, GatewayError> {
        let response = self
            .client
            .post(self.base_url.clone())
            .json(envelope)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!(
                "Gateway rejected {} request {} with HTTP {}",
                envelope.service_name, envelope.request_id, status
            );
            let status = StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
            return Err(GatewayError::Status(status));
        }

        debug!("Gateway accepted {} request {}", envelope.service_name, envelope.request_id);
        Ok(response.json::<Value>().await?)
    }
}
