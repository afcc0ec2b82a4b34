use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

use crate::error::RelayError;
use crate::models::{
    Envelope, MerchantIdentity, PurchaseRequest, RefundRequest, ServiceParams,
    TransactionInfoRequest,
};
use crate::services::gateway_client::Gateway;

/// Builds envelopes for each HPP operation and forwards them to the gateway.
pub struct RelayService {
    gateway: Arc<dyn Gateway>,
    merchant: MerchantIdentity,
}

impl RelayService {
    pub fn new(gateway: Arc<dyn Gateway>, merchant: MerchantIdentity) -> Self {
        Self { gateway, merchant }
    }

    pub async fn initiate_purchase(&self, request: PurchaseRequest) -> Result<Value, RelayError> {
        info!("Purchase for reference {}", request.reference_id);
        self.forward(ServiceParams::purchase(&self.merchant, request)).await
    }

    pub async fn refund_purchase(&self, request: RefundRequest) -> Result<Value, RelayError> {
        info!("Refund for transaction {}", request.transaction_id);
        self.forward(ServiceParams::refund(&self.merchant, request)).await
    }

    pub async fn get_transaction_info(
        &self,
        request: TransactionInfoRequest,
    ) -> Result<Value, RelayError> {
        info!("Transaction info for reference {}", request.reference_id);
        self.forward(ServiceParams::transaction_info(&self.merchant, request)).await
    }

    async fn forward(&self, params: ServiceParams) -> Result<Value, RelayError> {
        let envelope = Envelope::new(params);
        let operation = envelope.service_name;

        match self.gateway.send(&envelope).await {
            Ok(body) => {
                info!("{} request {} completed", operation, envelope.request_id);
                Ok(body)
            }
            Err(e) => {
                error!("{} request {} failed: {}", operation, envelope.request_id, e);
                Err(RelayError::from_gateway(operation, e))
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::GatewayError;
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records every envelope and answers with a canned result.
    pub(crate) struct RecordingGateway {
        pub sent: Mutex<Vec<Value>>,
        pub reply: Option<StatusCode>,
    }

    impl RecordingGateway {
        pub(crate) fn ok() -> Self {
            Self { sent: Mutex::new(Vec::new()), reply: None }
        }

        pub(crate) fn failing(status: StatusCode) -> Self {
            Self { sent: Mutex::new(Vec::new()), reply: Some(status) }
        }
    }

    #[async_trait]
    impl Gateway for RecordingGateway {
        async fn send(&self, envelope: &Envelope) -> Result<Value, GatewayError> {
            let value = serde_json::to_value(envelope).unwrap();
            self.sent.lock().unwrap().push(value);
            match self.reply {
                None => Ok(json!({"responseCode": "2001"})),
                Some(status) => Err(GatewayError::Status(status)),
            }
        }
    }

    pub(crate) fn merchant() -> MerchantIdentity {
        MerchantIdentity {
            merchant_uid: "M0910291".to_string(),
            store_id: "1000297".to_string(),
            hpp_key: "HPP-KEY".to_string(),
        }
    }

    #[test]
    fn test_refund_forwards_one_envelope() {
        let gateway = Arc::new(RecordingGateway::ok());
        let service = RelayService::new(gateway.clone(), merchant());
        let request = RefundRequest {
            transaction_id: 12345,
            amount: 10.5,
            description: "test".to_string(),
        };

        let body = tokio_test::block_on(service.refund_purchase(request)).unwrap();
        assert_eq!(body, json!({"responseCode": "2001"}));

        let sent = gateway.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0]["serviceName"], "HPP_REFUNDPURCHASE");
        assert_eq!(sent[0]["serviceParams"]["transactionId"], 12345);
    }

    #[tokio::test]
    async fn test_distinct_request_ids_across_operations() {
        let gateway = Arc::new(RecordingGateway::ok());
        let service = RelayService::new(gateway.clone(), merchant());
        let info = || TransactionInfoRequest { reference_id: "ORD-1".to_string() };

        service.get_transaction_info(info()).await.unwrap();
        service.get_transaction_info(info()).await.unwrap();

        let sent = gateway.sent.lock().unwrap();
        assert_ne!(sent[0]["requestId"], sent[1]["requestId"]);
    }

    #[tokio::test]
    async fn test_status_error_carries_operation_message() {
        let gateway = Arc::new(RecordingGateway::failing(StatusCode::BAD_REQUEST));
        let service = RelayService::new(gateway, merchant());
        let request: PurchaseRequest =
            serde_json::from_value(json!({"referenceId": "ORD-1", "amount": 5.0})).unwrap();

        let err = service.initiate_purchase(request).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.detail(), "WaafiPay service error");
    }
}
