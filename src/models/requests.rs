use serde::{Deserialize, Serialize};

fn default_currency() -> String {
    "USD".to_string()
}

fn default_purchase_description() -> String {
    "Payment for order".to_string()
}

fn default_success_url() -> String {
    "http://localhost:3000/api/hpp/success".to_string()
}

fn default_failure_url() -> String {
    "http://localhost:3000/api/hpp/failure".to_string()
}

fn default_payment_method() -> String {
    "MWALLET_ACCOUNT".to_string()
}

fn default_refund_description() -> String {
    "Order refund".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub reference_id: String,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_purchase_description")]
    pub description: String,
    #[serde(default = "default_success_url")]
    pub success_url: String,
    #[serde(default = "default_failure_url")]
    pub failure_url: String,
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequest {
    pub transaction_id: i64,
    pub amount: f64,
    #[serde(default = "default_refund_description")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInfoRequest {
    pub reference_id: String,
}
