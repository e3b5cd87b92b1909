use common::{
    clock::Clock,
    env_config::CheckoutDefaults,
    error::{AppError, Res},
    ids::IdGenerator,
    request::{self, non_empty, or_default},
    status::ORDER_PENDING,
};
use db::{
    dtos::order::OrderCreateRequest,
    models::{order::Order, payment::Payment},
};
use sqlx::SqlitePool;

use crate::dtos::order::{CreateOrderRequest, CreateOrderResponse};

/// How many freshly generated ids are tried before an id collision is
/// reported as a storage error.
const MAX_ID_ATTEMPTS: u32 = 3;

/// Creates a new order in `pending` status.
///
/// # Arguments
///
/// * `pool` - A reference to the database connection pool.
/// * `ids` - Generator for the order id.
/// * `clock` - Source of `created_at` / `updated_at`.
/// * `defaults` - Values for fields the request leaves out.
/// * `req` - The checkout submission.
///
/// # Returns
///
/// The new order's id and status, `AppError::BadRequest` for invalid input
/// or `AppError::Database` when the row cannot be written.
pub async fn create_order(
    pool: &SqlitePool,
    ids: &dyn IdGenerator,
    clock: &dyn Clock,
    defaults: &CheckoutDefaults,
    req: CreateOrderRequest,
) -> Res<CreateOrderResponse> {
    let email = non_empty(req.email)
        .ok_or_else(|| AppError::BadRequest("email is required".to_string()))?;
    let total_amount =
        request::amount(req.total_amount.unwrap_or(defaults.amount), "totalAmount")?;
    let currency = or_default(req.currency, &defaults.currency, "currency")?;
    let customer_name = customer_name(req.first_name.as_deref(), req.last_name.as_deref());
    let phone = non_empty(req.phone);
    let now = clock.now();

    let mut attempt = 1;
    loop {
        let id = ids.order_id(now);
        let result = db::order::insert_order(
            pool,
            OrderCreateRequest {
                id: id.clone(),
                customer_name: customer_name.clone(),
                customer_email: email.clone(),
                phone: phone.clone(),
                total_amount,
                currency: currency.clone(),
                status: ORDER_PENDING.to_string(),
                created_at: now,
            },
        )
        .await;

        match result {
            Ok(order) => {
                log::info!(
                    "Created order {} for {} ({} {})",
                    order.id,
                    order.customer_email,
                    order.total_amount,
                    order.currency
                );
                return Ok(CreateOrderResponse {
                    id: order.id,
                    status: order.status,
                });
            }
            Err(err) if err.is_unique_violation() && attempt < MAX_ID_ATTEMPTS => {
                log::warn!("Order id {} already taken, generating another", id);
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Looks up an order by id.
pub async fn get_order(pool: &SqlitePool, order_id: &str) -> Res<Order> {
    db::order::get_order_by_id(pool, order_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {}", order_id)))
}

/// Lists the payments recorded against an existing order, newest first.
pub async fn get_order_payments(pool: &SqlitePool, order_id: &str) -> Res<Vec<Payment>> {
    let order = get_order(pool, order_id).await?;
    db::payment::get_payments_by_order_id(pool, &order.id).await
}

/// Joins the non-empty name parts with a single space.
fn customer_name(first_name: Option<&str>, last_name: Option<&str>) -> Option<String> {
    let name = [first_name, last_name]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if name.is_empty() { None } else { Some(name) }
}
