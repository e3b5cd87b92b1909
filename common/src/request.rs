use crate::error::{AppError, Res};

/// Largest amount, in minor units, accepted for an order or a payment.
///
/// Keeps `SUM(amount)` over the payments table well inside `i64`. The same
/// bound is enforced by CHECK constraints in the schema.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// Trimmed value, or `None` when absent or blank.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Falls back to `default` when the field is absent; an explicitly blank
/// value is an error.
pub fn or_default(value: Option<String>, default: &str, field: &str) -> Res<String> {
    match value {
        None => Ok(default.to_string()),
        Some(value) => non_empty(Some(value))
            .ok_or_else(|| AppError::BadRequest(format!("{} must not be empty", field))),
    }
}

/// Checks that `amount` lies in `1..=MAX_AMOUNT`.
pub fn amount(value: i64, field: &str) -> Res<i64> {
    if (1..=MAX_AMOUNT).contains(&value) {
        Ok(value)
    } else {
        Err(AppError::BadRequest(format!(
            "{} must be a positive integer no greater than {}",
            field, MAX_AMOUNT
        )))
    }
}
