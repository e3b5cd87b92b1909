use db::models::payment::RecentPayment;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_orders: i64,
    pub paid_orders: i64,
    pub total_revenue: i64,
    pub recent_payments: Vec<RecentPayment>,
}
