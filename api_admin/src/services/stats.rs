use common::{
    error::Res,
    status::{ORDER_PAID, PAYMENT_SUCCEEDED},
};
use sqlx::SqlitePool;

use crate::dtos::stats::StatsSummary;

pub const RECENT_PAYMENTS_LIMIT: i64 = 10;

/// Builds the admin summary from one read transaction, so the counts and
/// the payment list describe the same point in time.
pub async fn summary(pool: &SqlitePool) -> Res<StatsSummary> {
    let mut tx = pool.begin().await?;

    let total_orders = db::stats::count_orders(&mut *tx).await?;
    let paid_orders = db::stats::count_orders_by_status(&mut *tx, ORDER_PAID).await?;
    let total_revenue = db::stats::sum_payments_by_status(&mut *tx, PAYMENT_SUCCEEDED).await?;
    let recent_payments = db::stats::get_recent_payments(&mut *tx, RECENT_PAYMENTS_LIMIT).await?;

    tx.commit().await?;

    Ok(StatsSummary {
        total_orders,
        paid_orders,
        total_revenue,
        recent_payments,
    })
}
