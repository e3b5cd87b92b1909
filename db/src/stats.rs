use common::error::{AppError, Res};
use sqlx::{Executor, Sqlite};

use crate::models::payment::RecentPayment;

pub async fn count_orders<'e, E: Executor<'e, Database = Sqlite>>(executor: E) -> Res<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn count_orders_by_status<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    status: &str,
) -> Res<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE status = $1")
        .bind(status)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

/// Sum of `amount` over payments with the given status; 0 when there are none.
pub async fn sum_payments_by_status<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    status: &str,
) -> Res<i64> {
    sqlx::query_scalar("SELECT COALESCE(SUM(amount), 0) FROM payments WHERE status = $1")
        .bind(status)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_recent_payments<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    limit: i64,
) -> Res<Vec<RecentPayment>> {
    sqlx::query_as::<_, RecentPayment>(
        r#"
        SELECT id, order_id, amount, currency, status, received_at
        FROM payments
        ORDER BY received_at DESC, rowid DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}
