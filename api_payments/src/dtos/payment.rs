use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentRequest {
    pub order_id: Option<String>,
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub provider: Option<String>,
    pub provider_payment_id: Option<String>,
    pub status: Option<String>,
}

/// Echoes the status the caller reported, not the order status it produced.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentResponse {
    pub id: String,
    pub order_id: String,
    pub status: String,
}
