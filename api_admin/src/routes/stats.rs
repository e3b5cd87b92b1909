use std::sync::Arc;

use actix_web::{Responder, get, web};
use common::{error::Res, http::Success};
use sqlx::SqlitePool;

use crate::services;

/// Order and revenue summary for the admin dashboard.
///
/// # Output
/// - Success: `{ totalOrders, paidOrders, totalRevenue, recentPayments: [...] }`
///   where each recent payment is `{ id, order_id, amount, currency, status, received_at }`
/// - Error: 500 on storage failure
#[get("/stats")]
pub async fn get_stats(pool: web::Data<Arc<SqlitePool>>) -> Res<impl Responder> {
    let summary = services::stats::summary(&pool).await?;
    Success::ok(summary)
}
