use chrono::{DateTime, Utc};
use common::error::{AppError, Res};
use sqlx::{Executor, Sqlite};

use crate::{dtos::order::OrderCreateRequest, models::order::Order};

pub async fn insert_order<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    data: OrderCreateRequest,
) -> Res<Order> {
    sqlx::query_as::<_, Order>(
        r#"
        INSERT INTO orders (id, customer_name, customer_email, phone, total_amount, currency, status, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
        RETURNING *
        "#,
    )
    .bind(data.id)
    .bind(data.customer_name)
    .bind(data.customer_email)
    .bind(data.phone)
    .bind(data.total_amount)
    .bind(data.currency)
    .bind(data.status)
    .bind(data.created_at)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn get_order_by_id<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    order_id: &str,
) -> Res<Option<Order>> {
    sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
        .bind(order_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

/// Sets the status of an order, returning the updated row or `None` when no
/// order has that id.
pub async fn update_order_status<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    order_id: &str,
    status: &str,
    updated_at: DateTime<Utc>,
) -> Res<Option<Order>> {
    sqlx::query_as::<_, Order>(
        "UPDATE orders SET status = $1, updated_at = $2 WHERE id = $3 RETURNING *",
    )
    .bind(status)
    .bind(updated_at)
    .bind(order_id)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}
