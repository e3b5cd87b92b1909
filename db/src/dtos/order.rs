use chrono::{DateTime, Utc};

pub struct OrderCreateRequest {
    pub id: String,
    pub customer_name: Option<String>,
    pub customer_email: String,
    pub phone: Option<String>,
    pub total_amount: i64,
    pub currency: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
