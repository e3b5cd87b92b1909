use common::{
    clock::Clock,
    env_config::CheckoutDefaults,
    error::{AppError, Res},
    ids::IdGenerator,
    request::{self, non_empty, or_default},
    status::{PAYMENT_SUCCEEDED, StatusPolicy, order_status_for},
};
use db::dtos::payment::PaymentCreateRequest;
use sqlx::SqlitePool;

use crate::dtos::payment::{RecordPaymentRequest, RecordPaymentResponse};

/// Records a payment event and moves the referenced order to the status it
/// implies, in a single transaction.
///
/// A `succeeded` payment marks the order `paid`; any other accepted status
/// is copied onto the order as is. Every call reassigns the order status,
/// regardless of what it was before.
///
/// The reported status is trusted as sent. Nothing here talks to a payment
/// processor, so this must not be used to settle real money.
///
/// # Arguments
///
/// * `pool` - A reference to the database connection pool.
/// * `ids` - Generator for the payment id.
/// * `clock` - Source of `received_at` and the order's `updated_at`.
/// * `defaults` - Values for fields the request leaves out.
/// * `policy` - Which status strings are accepted.
/// * `req` - The payment outcome reported by the client.
///
/// # Returns
///
/// The payment id, order id and reported status, `AppError::NotFound` when
/// the order does not exist, `AppError::BadRequest` for invalid input.
pub async fn record_payment(
    pool: &SqlitePool,
    ids: &dyn IdGenerator,
    clock: &dyn Clock,
    defaults: &CheckoutDefaults,
    policy: StatusPolicy,
    req: RecordPaymentRequest,
) -> Res<RecordPaymentResponse> {
    let order_id = non_empty(req.order_id)
        .ok_or_else(|| AppError::BadRequest("orderId is required".to_string()))?;
    let amount = request::amount(req.amount.unwrap_or(defaults.amount), "amount")?;
    let currency = or_default(req.currency, &defaults.currency, "currency")?;
    let provider = or_default(req.provider, &defaults.provider, "provider")?;
    let provider_payment_id = non_empty(req.provider_payment_id);
    let status = or_default(req.status, PAYMENT_SUCCEEDED, "status")?;
    policy.validate(&status)?;

    let now = clock.now();
    let mut tx = pool.begin().await?;

    // Writing the order row first makes this transaction take SQLite's write
    // lock before it reads anything, so concurrent payments for the same
    // order queue up instead of failing on a stale snapshot.
    let order =
        db::order::update_order_status(&mut *tx, &order_id, order_status_for(&status), now)
            .await?;
    let Some(order) = order else {
        tx.rollback().await?;
        return Err(AppError::NotFound(format!("order {}", order_id)));
    };

    let payment = db::payment::insert_payment(
        &mut *tx,
        PaymentCreateRequest {
            id: ids.payment_id(),
            order_id: order.id,
            provider,
            provider_payment_id,
            amount,
            currency,
            status,
            received_at: now,
        },
    )
    .await?;

    tx.commit().await?;

    log::info!(
        "Recorded payment {} ({}) for order {}, order is now {}",
        payment.id,
        payment.status,
        payment.order_id,
        order.status
    );

    Ok(RecordPaymentResponse {
        id: payment.id,
        order_id: payment.order_id,
        status: payment.status,
    })
}
