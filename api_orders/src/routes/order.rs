use std::sync::Arc;

use actix_web::{Responder, get, post, web};
use common::{
    clock::SharedClock, env_config::Config, error::Res, http::Success, ids::SharedIds,
};
use sqlx::SqlitePool;

use crate::{dtos::order::CreateOrderRequest, services};

/// Creates an order from the checkout form.
///
/// # Input
/// - `req`: JSON body with `firstName?`, `lastName?`, `email`, `phone?`,
///   `totalAmount?` (default 399) and `currency?` (default "INR")
///
/// # Output
/// - Success: `{ "id": "ORD-2026-...", "status": "pending" }`
/// - Error: 400 when `email` is missing or a field is invalid, 500 on storage failure
///
/// # Frontend Example
/// ```javascript
/// const res = await fetch('/api/orders', {
///   method: 'POST',
///   headers: { 'Content-Type': 'application/json' },
///   body: JSON.stringify({ firstName: 'Asha', email: 'asha@example.com', totalAmount: 399 })
/// });
/// const { id } = await res.json();
/// ```
#[post("")]
pub async fn post_order(
    pool: web::Data<Arc<SqlitePool>>,
    config: web::Data<Arc<Config>>,
    ids: web::Data<SharedIds>,
    clock: web::Data<SharedClock>,
    req: web::Json<CreateOrderRequest>,
) -> Res<impl Responder> {
    let created = services::order::create_order(
        &pool,
        &**ids.get_ref(),
        &**clock.get_ref(),
        &config.defaults,
        req.into_inner(),
    )
    .await?;
    Success::ok(created)
}

/// Returns a single order with all of its fields.
#[get("/{order_id}")]
pub async fn get_order(
    pool: web::Data<Arc<SqlitePool>>,
    path: web::Path<String>,
) -> Res<impl Responder> {
    let order = services::order::get_order(&pool, &path.into_inner()).await?;
    Success::ok(order)
}

/// Returns the payments recorded against an order, newest first.
#[get("/{order_id}/payments")]
pub async fn get_order_payments(
    pool: web::Data<Arc<SqlitePool>>,
    path: web::Path<String>,
) -> Res<impl Responder> {
    let payments = services::order::get_order_payments(&pool, &path.into_inner()).await?;
    Success::ok(payments)
}
