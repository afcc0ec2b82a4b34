pub mod envelope;
pub mod requests;

pub use envelope::{Envelope, MerchantIdentity, ServiceName, ServiceParams};
pub use requests::{PurchaseRequest, RefundRequest, TransactionInfoRequest};
