use chrono::{DateTime, Utc};

pub struct PaymentCreateRequest {
    pub id: String,
    pub order_id: String,
    pub provider: String,
    pub provider_payment_id: Option<String>,
    pub amount: i64,
    pub currency: String,
    pub status: String,
    pub received_at: DateTime<Utc>,
}
