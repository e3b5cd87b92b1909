use common::error::{AppError, Res};
use sqlx::{Executor, Sqlite};

use crate::{dtos::payment::PaymentCreateRequest, models::payment::Payment};

pub async fn insert_payment<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    data: PaymentCreateRequest,
) -> Res<Payment> {
    sqlx::query_as::<_, Payment>(
        r#"
        INSERT INTO payments (id, order_id, provider, provider_payment_id, amount, currency, status, received_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(data.id)
    .bind(data.order_id)
    .bind(data.provider)
    .bind(data.provider_payment_id)
    .bind(data.amount)
    .bind(data.currency)
    .bind(data.status)
    .bind(data.received_at)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

/// Payments recorded against one order, newest first.
pub async fn get_payments_by_order_id<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    order_id: &str,
) -> Res<Vec<Payment>> {
    sqlx::query_as::<_, Payment>(
        "SELECT * FROM payments WHERE order_id = $1 ORDER BY received_at DESC, rowid DESC",
    )
    .bind(order_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

#[cfg(test)]
pub(crate) mod tests {
    use chrono::{DateTime, Utc};
    use common::request::MAX_AMOUNT;
    use testresult::TestResult;

    use super::*;
    use crate::order::{
        insert_order,
        tests::{at, new_order},
    };

    pub(crate) fn new_payment(
        id: &str,
        order_id: &str,
        amount: i64,
        status: &str,
        received_at: DateTime<Utc>,
    ) -> PaymentCreateRequest {
        PaymentCreateRequest {
            id: id.to_string(),
            order_id: order_id.to_string(),
            provider: "card".to_string(),
            provider_payment_id: None,
            amount,
            currency: "INR".to_string(),
            status: status.to_string(),
            received_at,
        }
    }

    #[tokio::test]
    async fn payment_for_unknown_order_violates_foreign_key() -> TestResult {
        let pool = crate::setup("sqlite::memory:").await?;

        let result = insert_payment(&*pool, new_payment("PAY-1", "ORD-x", 399, "succeeded", at(9))).await;

        assert!(result.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn payment_above_the_amount_cap_is_rejected_by_the_schema() -> TestResult {
        let pool = crate::setup("sqlite::memory:").await?;
        insert_order(&*pool, new_order("ORD-1", at(8))).await?;

        let result =
            insert_payment(&*pool, new_payment("PAY-1", "ORD-1", MAX_AMOUNT + 1, "succeeded", at(9)))
                .await;

        assert!(result.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn lists_payments_of_an_order_newest_first() -> TestResult {
        let pool = crate::setup("sqlite::memory:").await?;
        insert_order(&*pool, new_order("ORD-1", at(8))).await?;
        insert_order(&*pool, new_order("ORD-2", at(8))).await?;

        insert_payment(&*pool, new_payment("PAY-1", "ORD-1", 100, "failed", at(9))).await?;
        insert_payment(&*pool, new_payment("PAY-2", "ORD-1", 399, "succeeded", at(11))).await?;
        insert_payment(&*pool, new_payment("PAY-3", "ORD-2", 399, "succeeded", at(10))).await?;

        let payments = get_payments_by_order_id(&*pool, "ORD-1").await?;
        let ids: Vec<&str> = payments.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, vec!["PAY-2", "PAY-1"]);
        assert_eq!(payments[0].provider, "card");
        assert_eq!(payments[0].received_at, at(11));
        Ok(())
    }
}
