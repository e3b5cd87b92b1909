use std::sync::Arc;

use actix_web::{Responder, post, web};
use common::{
    clock::SharedClock, env_config::Config, error::Res, http::Success, ids::SharedIds,
};
use sqlx::SqlitePool;

use crate::{dtos::payment::RecordPaymentRequest, services};

/// Records the outcome of a checkout payment.
///
/// # Input
/// - `req`: JSON body with `orderId`, `amount?` (default 399), `currency?`
///   (default "INR"), `provider?` (default "manual"), `providerPaymentId?` and
///   `status?` (default "succeeded")
///
/// # Output
/// - Success: `{ "id": "PAY-...", "orderId": "ORD-...", "status": "succeeded" }`
/// - Error: 400 when `orderId` is missing or a field is invalid, 404 when the
///   order does not exist, 500 on storage failure
///
/// # Note
/// The status is whatever the client says it is. There is no processor
/// callback behind this endpoint, so any caller can mark an order paid.
#[post("")]
pub async fn post_payment(
    pool: web::Data<Arc<SqlitePool>>,
    config: web::Data<Arc<Config>>,
    ids: web::Data<SharedIds>,
    clock: web::Data<SharedClock>,
    req: web::Json<RecordPaymentRequest>,
) -> Res<impl Responder> {
    let recorded = services::payment::record_payment(
        &pool,
        &**ids.get_ref(),
        &**clock.get_ref(),
        &config.defaults,
        config.payment_status_policy,
        req.into_inner(),
    )
    .await?;
    Success::ok(recorded)
}
