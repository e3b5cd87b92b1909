use serde::{Deserialize, Serialize};

/// Checkout form submission. Every field is optional on the wire so that a
/// missing email is reported as a validation error rather than a parse error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub total_amount: Option<i64>,
    pub currency: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateOrderResponse {
    pub id: String,
    pub status: String,
}
