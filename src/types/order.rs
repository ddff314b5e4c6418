//! Swap orders for the dark pool matching engine.
//!
//! ## SSZ Serialization
//!
//! `Order` derives `SimpleSerialize` from ssz_rs for deterministic encoding.
//! SSZ encoding rules (ethereum.org):
//! - Basic types (u8, u64, u128): Direct little-endian encoding
//! - Fixed-size composites: Concatenated little-endian fields
//!
//! Enum-valued fields are stored raw (`u8`, `[u8; 20]`) and exposed through
//! typed accessors.

use ssz_rs::prelude::*;

use crate::types::{Address, Amount};

// ============================================================================
// Direction enum
// ============================================================================

/// Trading direction: which asset of the pair is offered, which is wanted.
///
/// Represented as u8 for SSZ compatibility:
/// - AtoB = 0 (offers asset A, wants asset B)
/// - BtoA = 1 (offers asset B, wants asset A)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Offers asset A in exchange for asset B
    #[default]
    AtoB,
    /// Offers asset B in exchange for asset A
    BtoA,
}

impl Direction {
    /// Both directions, AtoB first
    pub const ALL: [Direction; 2] = [Direction::AtoB, Direction::BtoA];

    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            Direction::AtoB => 0,
            Direction::BtoA => 1,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Direction::AtoB),
            1 => Some(Direction::BtoA),
            _ => None,
        }
    }

    /// Boolean direction flag: `true` means A to B.
    pub fn from_flag(a_to_b: bool) -> Self {
        if a_to_b {
            Direction::AtoB
        } else {
            Direction::BtoA
        }
    }

    /// Boolean direction flag: `true` means A to B.
    pub fn as_flag(self) -> bool {
        self == Direction::AtoB
    }

    /// Returns the opposite direction (the side an order matches against)
    pub fn opposite(self) -> Self {
        match self {
            Direction::AtoB => Direction::BtoA,
            Direction::BtoA => Direction::AtoB,
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A swap order, either in flight or resting in a queue.
///
/// `amount_in` is the offered amount still held in escrow; `amount_out` is
/// the wanted amount still outstanding. Both only ever decrease, and only
/// the match loop decreases them.
///
/// ## SSZ Layout
///
/// Fixed-size container: 8 + 20 + 1 + 16 + 16 = 61 bytes.
///
/// ## Example
///
/// ```
/// use dark_pool::types::{Address, Direction, Order};
///
/// let order = Order::new(1, Address::from_label("alice"), Direction::AtoB, 100, 90);
/// assert_eq!(order.direction(), Direction::AtoB);
/// assert!(!order.is_consumed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct Order {
    /// Order identifier (assigned by the pool, starts at 1)
    pub id: u64,

    /// Submitting account as raw bytes
    pub trader_raw: [u8; 20],

    /// Direction as u8 (0=AtoB, 1=BtoA)
    pub direction_raw: u8,

    /// Remaining offered amount held in escrow
    pub amount_in: u128,

    /// Remaining wanted amount
    pub amount_out: u128,
}

impl Order {
    /// Create a new order with its full submitted amounts
    pub fn new(
        id: u64,
        trader: Address,
        direction: Direction,
        amount_in: Amount,
        amount_out: Amount,
    ) -> Self {
        Self {
            id,
            trader_raw: trader.0,
            direction_raw: direction.to_u8(),
            amount_in,
            amount_out,
        }
    }

    /// Get the submitting account
    #[inline]
    pub fn trader(&self) -> Address {
        Address(self.trader_raw)
    }

    /// Get the order direction
    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::from_u8(self.direction_raw).unwrap_or_default()
    }

    /// No escrow left: the order is terminal and must not rest in a queue
    #[inline]
    pub fn is_consumed(&self) -> bool {
        self.amount_in == 0
    }

    /// Escrow left but nothing more wanted.
    ///
    /// Such an order crosses with any counter-order and gives its remaining
    /// `amount_in` away.
    #[inline]
    pub fn has_zero_ask(&self) -> bool {
        self.amount_in > 0 && self.amount_out == 0
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
