use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub order_id: String,
    pub provider: String,
    pub provider_payment_id: Option<String>,
    pub amount: i64,
    pub currency: String,
    pub status: String,
    pub received_at: DateTime<Utc>,
}

/// Row shape of the admin "recent payments" listing.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct RecentPayment {
    pub id: String,
    pub order_id: String,
    pub amount: i64,
    pub currency: String,
    pub status: String,
    pub received_at: DateTime<Utc>,
}
