//! Submission receipt: the explicit output of one swap request.
//!
//! A receipt lists every fulfillment record in emission order and states
//! what happened to the incoming order.

use crate::types::{Amount, FulfillmentRecord};

/// Final state of the incoming order after the match loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Fully consumed; nothing was queued
    Consumed,
    /// Remainder appended to the tail of its own direction's queue
    Queued { amount_in: Amount, amount_out: Amount },
    /// Ask reached zero; leftover escrow returned to the trader
    Refunded { amount: Amount },
}

/// Receipt for a committed submission.
///
/// ## Example
///
/// ```
/// use dark_pool::types::{Outcome, SubmissionReceipt};
///
/// let receipt = SubmissionReceipt::new(1, Vec::new(), Outcome::Queued { amount_in: 100, amount_out: 90 });
/// assert_eq!(receipt.fill_count(), 0);
/// assert!(receipt.is_queued());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Id assigned to the incoming order
    pub order_id: u64,

    /// Fulfillment records in emission order (resting then incoming, per fill)
    pub records: Vec<FulfillmentRecord>,

    /// What happened to the incoming order
    pub outcome: Outcome,
}

impl SubmissionReceipt {
    pub fn new(order_id: u64, records: Vec<FulfillmentRecord>, outcome: Outcome) -> Self {
        Self {
            order_id,
            records,
            outcome,
        }
    }

    /// Number of crossing steps (each emits two records)
    pub fn fill_count(&self) -> usize {
        self.records.len() / 2
    }

    /// Whether the incoming order left a remainder in the queue
    pub fn is_queued(&self) -> bool {
        matches!(self.outcome, Outcome::Queued { .. })
    }

    /// Records emitted for the incoming order only
    pub fn incoming_records(&self) -> impl Iterator<Item = &FulfillmentRecord> {
        let id = self.order_id;
        self.records.iter().filter(move |r| r.order_id == id)
    }

    /// Records emitted for consumed resting orders only
    pub fn resting_records(&self) -> impl Iterator<Item = &FulfillmentRecord> {
        let id = self.order_id;
        self.records.iter().filter(move |r| r.order_id != id)
    }

    /// Total amount the incoming trader received across all fills
    pub fn total_received(&self) -> Amount {
        self.incoming_records().map(|r| r.amount_out).sum()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
