use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use super::requests::{PurchaseRequest, RefundRequest, TransactionInfoRequest};

pub const SCHEMA_VERSION: &str = "1.0";
pub const CHANNEL_NAME: &str = "WEB";
/// Wire format expected by the gateway: local time, no zone suffix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const HPP_RESP_DATA_FORMAT: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ServiceName {
    #[serde(rename = "HPP_PURCHASE")]
    Purchase,
    #[serde(rename = "HPP_REFUNDPURCHASE")]
    RefundPurchase,
    #[serde(rename = "HPP_GETTRANINFO")]
    GetTranInfo,
}

impl ServiceName {
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceName::Purchase => "HPP_PURCHASE",
            ServiceName::RefundPurchase => "HPP_REFUNDPURCHASE",
            ServiceName::GetTranInfo => "HPP_GETTRANINFO",
        }
    }

    /// Message surfaced to the caller when the gateway answers with a non-200 status.
    pub fn error_detail(self) -> &'static str {
        match self {
            ServiceName::Purchase => "WaafiPay service error",
            ServiceName::RefundPurchase => "WaafiPay refund error",
            ServiceName::GetTranInfo => "WaafiPay query error",
        }
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static merchant credentials stamped into every envelope.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantIdentity {
    pub merchant_uid: String,
    pub store_id: String,
    pub hpp_key: String,
}

impl fmt::Debug for MerchantIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerchantIdentity")
            .field("merchant_uid", &self.merchant_uid)
            .field("store_id", &self.store_id)
            .field("hpp_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInfo {
    pub reference_id: String,
    pub amount: f64,
    pub currency: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseParams {
    #[serde(flatten)]
    pub merchant: MerchantIdentity,
    pub payment_method: String,
    pub hpp_success_callback_url: String,
    pub hpp_failure_callback_url: String,
    pub hpp_resp_data_format: u8,
    pub transaction_info: TransactionInfo,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundParams {
    #[serde(flatten)]
    pub merchant: MerchantIdentity,
    pub amount: f64,
    pub transaction_id: i64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInfoParams {
    #[serde(flatten)]
    pub merchant: MerchantIdentity,
    pub reference_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ServiceParams {
    Purchase(PurchaseParams),
    Refund(RefundParams),
    TransactionInfo(TransactionInfoParams),
}

impl ServiceParams {
    pub fn purchase(merchant: &MerchantIdentity, req: PurchaseRequest) -> Self {
        ServiceParams::Purchase(PurchaseParams {
            merchant: merchant.clone(),
            payment_method: req.payment_method,
            hpp_success_callback_url: req.success_url,
            hpp_failure_callback_url: req.failure_url,
            hpp_resp_data_format: HPP_RESP_DATA_FORMAT,
            transaction_info: TransactionInfo {
                reference_id: req.reference_id,
                amount: req.amount,
                currency: req.currency,
                description: req.description,
            },
        })
    }

    pub fn refund(merchant: &MerchantIdentity, req: RefundRequest) -> Self {
        ServiceParams::Refund(RefundParams {
            merchant: merchant.clone(),
            amount: req.amount,
            transaction_id: req.transaction_id,
            description: req.description,
        })
    }

    pub fn transaction_info(merchant: &MerchantIdentity, req: TransactionInfoRequest) -> Self {
        ServiceParams::TransactionInfo(TransactionInfoParams {
            merchant: merchant.clone(),
            reference_id: req.reference_id,
        })
    }

    pub fn service_name(&self) -> ServiceName {
        match self {
            ServiceParams::Purchase(_) => ServiceName::Purchase,
            ServiceParams::Refund(_) => ServiceName::RefundPurchase,
            ServiceParams::TransactionInfo(_) => ServiceName::GetTranInfo,
        }
    }
}

/// Request body POSTed to the gateway.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub schema_version: &'static str,
    pub request_id: Uuid,
    pub timestamp: String,
    pub channel_name: &'static str,
    pub service_name: ServiceName,
    pub service_params: ServiceParams,
}

impl Envelope {
    pub fn new(service_params: ServiceParams) -> Self {
        Self::stamped(service_params, Uuid::new_v4(), Local::now())
    }

    pub fn stamped(service_params: ServiceParams, request_id: Uuid, at: DateTime<Local>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            request_id,
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            channel_name: CHANNEL_NAME,
            service_name: service_params.service_name(),
            service_params,
        }
    }
}
