use std::{fmt, str::FromStr};

use crate::error::{AppError, Res};

pub const ORDER_PENDING: &str = "pending";
pub const ORDER_PAID: &str = "paid";
pub const PAYMENT_SUCCEEDED: &str = "succeeded";

/// Payment statuses accepted under [`StatusPolicy::Strict`].
pub const KNOWN_PAYMENT_STATUSES: [&str; 5] =
    [PAYMENT_SUCCEEDED, "failed", "pending", "cancelled", "refunded"];

/// Order status that a payment with `payment_status` leaves behind.
///
/// A succeeded payment marks the order paid; anything else is copied over
/// verbatim.
pub fn order_status_for(payment_status: &str) -> &str {
    if payment_status == PAYMENT_SUCCEEDED {
        ORDER_PAID
    } else {
        payment_status
    }
}

/// Which caller-reported payment statuses are accepted.
///
/// The status is asserted by the client and never checked against a payment
/// processor; `Strict` narrows what may be written but does not make it
/// trustworthy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Any non-empty string.
    #[default]
    Passthrough,
    /// Only [`KNOWN_PAYMENT_STATUSES`].
    Strict,
}

impl StatusPolicy {
    pub fn validate(&self, status: &str) -> Res<()> {
        if status.trim().is_empty() {
            return Err(AppError::BadRequest("status must not be empty".to_string()));
        }
        match self {
            StatusPolicy::Passthrough => Ok(()),
            StatusPolicy::Strict if KNOWN_PAYMENT_STATUSES.contains(&status) => Ok(()),
            StatusPolicy::Strict => Err(AppError::BadRequest(format!(
                "unknown payment status '{}'",
                status
            ))),
        }
    }
}

impl fmt::Display for StatusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusPolicy::Passthrough => f.write_str("passthrough"),
            StatusPolicy::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for StatusPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "passthrough" => Ok(StatusPolicy::Passthrough),
            "strict" => Ok(StatusPolicy::Strict),
            other => Err(format!("unknown status policy '{}'", other)),
        }
    }
}
