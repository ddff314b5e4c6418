//! The match loop.
//!
//! `match_order` walks the opposite queue from its head and decides, without
//! touching the book or any balance, which resting orders the incoming order
//! consumes and what is left of it afterwards. The pool settles the result
//! and only then applies it to the book.

use tracing::debug;

use crate::config::ZeroAskPolicy;
use crate::error::MatchError;
use crate::orderbook::OrderBook;
use crate::types::{Amount, FulfillmentRecord, Order};

/// One crossing step: a resting order consumed in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fill {
    /// The resting order as it stood when consumed
    pub resting: Order,

    /// Record for the resting order (its full remaining amounts)
    pub resting_record: FulfillmentRecord,

    /// Record for the incoming order (the matched portion only)
    pub incoming_record: FulfillmentRecord,
}

impl Fill {
    fn new(incoming: &Order, resting: Order) -> Self {
        Self {
            resting_record: FulfillmentRecord::for_resting(&resting),
            incoming_record: FulfillmentRecord::for_incoming(incoming, &resting),
            resting,
        }
    }
}

/// What to do with the incoming order once matching stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// No escrow left; discard
    Consumed,
    /// Append the remainder to the tail of its own queue
    Queue,
    /// Return the leftover escrow to the trader
    Refund(Amount),
}

/// Result of matching one incoming order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Fills in execution order (oldest resting order first)
    pub fills: Vec<Fill>,

    /// The incoming order with its remaining amounts
    pub incoming: Order,

    pub disposition: Disposition,
}

impl MatchResult {
    /// Fulfillment records in emission order: per fill, resting then incoming
    pub fn records(&self) -> Vec<FulfillmentRecord> {
        self.fills
            .iter()
            .flat_map(|fill| [fill.resting_record.clone(), fill.incoming_record.clone()])
            .collect()
    }

    pub fn fully_filled(&self) -> bool {
        self.disposition == Disposition::Consumed
    }
}

/// Stateless matcher, parametrized only by the zero-ask policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchingEngine {
    policy: ZeroAskPolicy,
}

impl MatchingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ZeroAskPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ZeroAskPolicy {
        self.policy
    }

    /// Match `incoming` against the opposite queue of `book`.
    ///
    /// Resting orders are visited strictly oldest first. The loop stops at
    /// the first resting order whose ask the incoming order cannot cover;
    /// orders behind it are never examined.
    ///
    /// # Errors
    ///
    /// [`MatchError::AskUnderflow`] if, under [`ZeroAskPolicy::Preserve`], a
    /// fill would deliver more than the incoming order still wants.
    pub fn match_order(&self, book: &OrderBook, mut incoming: Order) -> Result<MatchResult, MatchError> {
        let mut fills = Vec::new();

        for resting in book.iter(incoming.direction().opposite()) {
            // The incoming escrow must cover the resting order's whole ask
            if incoming.amount_in < resting.amount_out {
                break;
            }
            if self.policy == ZeroAskPolicy::Refund && resting.amount_in > incoming.amount_out {
                break;
            }

            let remaining_out = incoming.amount_out.checked_sub(resting.amount_in).ok_or(
                MatchError::AskUnderflow {
                    order_id: incoming.id,
                    resting_id: resting.id,
                    remaining: incoming.amount_out,
                    delivered: resting.amount_in,
                },
            )?;

            incoming.amount_in -= resting.amount_out;
            incoming.amount_out = remaining_out;

            debug!(
                incoming = incoming.id,
                resting = resting.id,
                paid = resting.amount_out,
                received = resting.amount_in,
                "fill"
            );
            fills.push(Fill::new(&incoming, resting.clone()));

            if incoming.is_consumed() {
                break;
            }
            if self.policy == ZeroAskPolicy::Refund && incoming.amount_out == 0 {
                break;
            }
        }

        let disposition = if incoming.is_consumed() {
            Disposition::Consumed
        } else if self.policy == ZeroAskPolicy::Refund && incoming.amount_out == 0 {
            Disposition::Refund(incoming.amount_in)
        } else {
            Disposition::Queue
        };

        Ok(MatchResult {
            fills,
            incoming,
            disposition,
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
