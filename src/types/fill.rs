//! Records emitted by the pool and the registry.
//!
//! ## SSZ Serialization
//!
//! Records are serialized using SSZ for deterministic encoding, so an
//! observer can hash an event stream and compare it across replicas.

use ssz_rs::prelude::*;

use crate::types::{Address, Amount, Direction, Order};

/// One side of a fill.
///
/// Every successful crossing step emits two of these: one for the resting
/// order (its full remaining amounts, since it is always fully consumed) and
/// one for the incoming order (only the matched portion).
///
/// ## Example
///
/// ```
/// use dark_pool::types::{Address, Direction, FulfillmentRecord};
///
/// let record = FulfillmentRecord::new(3, Address::from_label("bob"), 90, 100, Direction::BtoA);
/// assert_eq!(record.direction(), Direction::BtoA);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct FulfillmentRecord {
    /// Order this record belongs to
    pub order_id: u64,

    /// Trader whose order was (partially) filled
    pub trader_raw: [u8; 20],

    /// Amount of the offered asset delivered by the trader in this fill
    pub amount_in: u128,

    /// Amount of the wanted asset received by the trader in this fill
    pub amount_out: u128,

    /// Direction of the filled order as u8 (0=AtoB, 1=BtoA)
    pub direction_raw: u8,
}

impl FulfillmentRecord {
    /// Create a new fulfillment record
    pub fn new(
        order_id: u64,
        trader: Address,
        amount_in: Amount,
        amount_out: Amount,
        direction: Direction,
    ) -> Self {
        Self {
            order_id,
            trader_raw: trader.0,
            amount_in,
            amount_out,
            direction_raw: direction.to_u8(),
        }
    }

    /// Record for a resting order consumed in full
    pub fn for_resting(resting: &Order) -> Self {
        Self::new(
            resting.id,
            resting.trader(),
            resting.amount_in,
            resting.amount_out,
            resting.direction(),
        )
    }

    /// Record for the matched portion of an incoming order.
    ///
    /// The incoming trader delivers what the resting order asked for and
    /// receives what the resting order offered.
    pub fn for_incoming(incoming: &Order, resting: &Order) -> Self {
        Self::new(
            incoming.id,
            incoming.trader(),
            resting.amount_out,
            resting.amount_in,
            incoming.direction(),
        )
    }

    /// Get the trader
    #[inline]
    pub fn trader(&self) -> Address {
        Address(self.trader_raw)
    }

    /// Get the direction
    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::from_u8(self.direction_raw).unwrap_or_default()
    }
}

/// Emitted by the registry when a pool is created.
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct PoolCreated {
    pub creator_raw: [u8; 20],
    pub pool_raw: [u8; 20],
    pub asset_a_raw: [u8; 20],
    pub asset_b_raw: [u8; 20],
}

impl PoolCreated {
    pub fn new(creator: Address, pool: Address, asset_a: Address, asset_b: Address) -> Self {
        Self {
            creator_raw: creator.0,
            pool_raw: pool.0,
            asset_a_raw: asset_a.0,
            asset_b_raw: asset_b.0,
        }
    }

    pub fn creator(&self) -> Address {
        Address(self.creator_raw)
    }

    pub fn pool(&self) -> Address {
        Address(self.pool_raw)
    }

    pub fn asset_a(&self) -> Address {
        Address(self.asset_a_raw)
    }

    pub fn asset_b(&self) -> Address {
        Address(self.asset_b_raw)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
