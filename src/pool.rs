//! A dark pool for one asset pair.
//!
//! ## Submission
//!
//! `submit_swap_request` is one atomic unit of work:
//!
//! 1. Validate both amounts are positive
//! 2. Pull `amount_in` of the offered asset from the trader into custody
//! 3. Match against the opposite queue (see [`crate::engine`])
//! 4. Per fill: pay the resting order's escrow to the incoming trader, then
//!    pay the resting order's ask out of the incoming escrow
//! 5. Queue, discard or refund what is left of the incoming order
//!
//! Token movements run inside a [`Transaction`]; the book is only updated
//! after the transaction committed. Any failure leaves queues and balances
//! exactly as they were.

use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::engine::{Disposition, MatchResult, MatchingEngine};
use crate::error::{AmountField, SubmitError};
use crate::orderbook::{OrderBook, QueueIter};
use crate::token::{TokenService, Transaction};
use crate::types::{Address, Amount, AssetId, Direction, Order, Outcome, PoolId, SubmissionReceipt};

/// Matching engine instance bound to `(asset_a, asset_b)` for its lifetime.
#[derive(Debug)]
pub struct Pool {
    /// Custody account of this pool
    address: PoolId,
    asset_a: AssetId,
    asset_b: AssetId,
    book: OrderBook,
    engine: MatchingEngine,
}

impl Pool {
    pub fn new(address: PoolId, asset_a: AssetId, asset_b: AssetId, config: &EngineConfig) -> Self {
        Self {
            address,
            asset_a,
            asset_b,
            book: OrderBook::with_capacity(config.order_capacity),
            engine: MatchingEngine::with_policy(config.zero_ask_policy),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn address(&self) -> PoolId {
        self.address
    }

    #[inline]
    pub fn asset_a(&self) -> AssetId {
        self.asset_a
    }

    #[inline]
    pub fn asset_b(&self) -> AssetId {
        self.asset_b
    }

    /// Asset an order of `direction` gives up
    pub fn offered_asset(&self, direction: Direction) -> AssetId {
        match direction {
            Direction::AtoB => self.asset_a,
            Direction::BtoA => self.asset_b,
        }
    }

    /// Asset an order of `direction` receives
    pub fn wanted_asset(&self, direction: Direction) -> AssetId {
        self.offered_asset(direction.opposite())
    }

    /// Number of resting orders offering in `direction`
    pub fn get_pending_orders_count(&self, direction: Direction) -> usize {
        self.book.pending_count(direction)
    }

    /// Resting orders of `direction`, oldest first
    pub fn pending_orders(&self, direction: Direction) -> QueueIter<'_> {
        self.book.iter(direction)
    }

    /// Escrow held for resting orders of `direction`, in the offered asset
    pub fn escrowed(&self, direction: Direction) -> Amount {
        self.book.escrowed(direction)
    }

    /// Commitment to both queues
    pub fn state_root(&self) -> [u8; 32] {
        self.book.compute_state_root()
    }

    // ========================================================================
    // Submission
    // ========================================================================

    /// Submit a swap request on behalf of `trader`.
    ///
    /// The trader must have approved the pool address for at least
    /// `amount_in` of the offered asset.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::InvalidAmount`] if either amount is zero
    /// - [`SubmitError::EscrowFailure`] if the escrow pull is declined
    /// - [`SubmitError::TransferFailure`] if a payout is declined
    /// - [`SubmitError::Match`] if a fill would overshoot the incoming ask
    ///
    /// On error nothing has changed.
    pub fn submit_swap_request<T: TokenService + ?Sized>(
        &mut self,
        tokens: &mut T,
        trader: Address,
        amount_in: Amount,
        amount_out: Amount,
        direction: Direction,
    ) -> Result<SubmissionReceipt, SubmitError> {
        if amount_in == 0 {
            return Err(SubmitError::InvalidAmount(AmountField::AmountIn));
        }
        if amount_out == 0 {
            return Err(SubmitError::InvalidAmount(AmountField::AmountOut));
        }

        let incoming = Order::new(self.book.peek_next_order_id(), trader, direction, amount_in, amount_out);

        let mut tx = Transaction::begin(tokens);
        match self.settle(&mut *tx, incoming) {
            Ok(result) => {
                tx.commit();
                let receipt = self.apply(result);
                info!(
                    pool = %self.address,
                    %trader,
                    order_id = receipt.order_id,
                    fills = receipt.fill_count(),
                    outcome = ?receipt.outcome,
                    "swap request settled"
                );
                Ok(receipt)
            }
            Err(err) => {
                warn!(pool = %self.address, %trader, error = %err, "swap request rolled back");
                Err(err)
            }
        }
    }

    /// Escrow, match and pay out. Token effects only; the book is untouched.
    fn settle<T: TokenService + ?Sized>(&self, tokens: &mut T, incoming: Order) -> Result<MatchResult, SubmitError> {
        let trader = incoming.trader();
        let direction = incoming.direction();
        let offered = self.offered_asset(direction);
        let wanted = self.wanted_asset(direction);

        tokens
            .transfer_from(&offered, &self.address, &trader, &self.address, incoming.amount_in)
            .map_err(SubmitError::EscrowFailure)?;

        let result = self.engine.match_order(&self.book, incoming)?;

        for fill in &result.fills {
            let resting = &fill.resting;
            tokens
                .transfer(&wanted, &self.address, &trader, resting.amount_in)
                .map_err(|source| SubmitError::TransferFailure {
                    order_id: resting.id,
                    source,
                })?;
            tokens
                .transfer(&offered, &self.address, &resting.trader(), resting.amount_out)
                .map_err(|source| SubmitError::TransferFailure {
                    order_id: result.incoming.id,
                    source,
                })?;
        }

        if let Disposition::Refund(amount) = result.disposition {
            tokens
                .transfer(&offered, &self.address, &trader, amount)
                .map_err(|source| SubmitError::TransferFailure {
                    order_id: result.incoming.id,
                    source,
                })?;
        }

        Ok(result)
    }

    /// Apply a settled match to the book. Infallible.
    fn apply(&mut self, result: MatchResult) -> SubmissionReceipt {
        let order_id = self.book.next_order_id();
        debug_assert_eq!(order_id, result.incoming.id);

        let opposite = result.incoming.direction().opposite();
        for fill in &result.fills {
            let consumed = self.book.pop_front(opposite);
            debug_assert_eq!(consumed.map(|o| o.id), Some(fill.resting.id));
        }

        let records = result.records();
        let outcome = match result.disposition {
            Disposition::Consumed => Outcome::Consumed,
            Disposition::Refund(amount) => Outcome::Refunded { amount },
            Disposition::Queue => {
                let outcome = Outcome::Queued {
                    amount_in: result.incoming.amount_in,
                    amount_out: result.incoming.amount_out,
                };
                self.book.enqueue(result.incoming);
                outcome
            }
        };

        SubmissionReceipt::new(order_id, records, outcome)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
