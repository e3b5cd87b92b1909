//! Identifier generation for orders and payments.
//!
//! Handlers receive an `Arc<dyn IdGenerator>` through app data so tests can
//! swap in [`SequentialIds`] and get predictable values.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

use chrono::{DateTime, Datelike, Utc};
use uuid::Uuid;

pub const ORDER_PREFIX: &str = "ORD";
pub const PAYMENT_PREFIX: &str = "PAY";

pub type SharedIds = Arc<dyn IdGenerator>;

pub trait IdGenerator: Send + Sync {
    /// Id for a new order created at `now`.
    fn order_id(&self, now: DateTime<Utc>) -> String;

    /// Id for a new payment record.
    fn payment_id(&self) -> String;
}

/// Production generator: prefix, year and a full random v4 UUID in
/// uppercase hex, e.g. `ORD-2026-3F2A...`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn order_id(&self, now: DateTime<Utc>) -> String {
        format!("{}-{}-{}", ORDER_PREFIX, now.year(), random_suffix())
    }

    fn payment_id(&self) -> String {
        format!("{}-{}", PAYMENT_PREFIX, random_suffix())
    }
}

fn random_suffix() -> String {
    Uuid::new_v4().simple().to_string().to_uppercase()
}

/// Deterministic generator: `ORD-<year>-000001`, `PAY-000001`, ...
///
/// Values queued with [`SequentialIds::replay`] are handed out first, which
/// lets a caller force an id collision.
#[derive(Debug, Default)]
pub struct SequentialIds {
    orders: AtomicU64,
    payments: AtomicU64,
    queued_orders: Mutex<Vec<String>>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues order ids to be returned before the counter resumes.
    pub fn replay<I, S>(&self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        // popped from the back, so later ids sit in front
        let mut incoming: Vec<String> = ids.into_iter().map(Into::into).collect();
        incoming.reverse();
        if let Ok(mut queued) = self.queued_orders.lock() {
            queued.splice(0..0, incoming);
        }
    }
}

impl IdGenerator for SequentialIds {
    fn order_id(&self, now: DateTime<Utc>) -> String {
        if let Some(id) = self.queued_orders.lock().ok().and_then(|mut q| q.pop()) {
            return id;
        }
        let n = self.orders.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}-{}-{:06}", ORDER_PREFIX, now.year(), n)
    }

    fn payment_id(&self) -> String {
        let n = self.payments.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}-{:06}", PAYMENT_PREFIX, n)
    }
}
