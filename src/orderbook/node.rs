//! Order node for slab-based storage.
//!
//! ## Design
//!
//! `OrderNode` wraps an `Order` with a successor pointer so that the two
//! direction queues can thread through one shared slab. Orders only ever
//! leave a queue from the head, so a single link is enough.
//!
//! ## Slab Integration
//!
//! Per official slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - Keys may be reused after `slab.remove()`
//! - O(1) insert, remove, and lookup

use crate::types::{Amount, Order};

/// Order node stored in the slab.
///
/// The pointer is a slab key (`usize`), not a direct reference.
#[derive(Debug, Clone)]
pub struct OrderNode {
    /// The resting order
    pub order: Order,

    /// Next (newer) order in the same queue; None at the tail
    pub next: Option<usize>,
}

impl OrderNode {
    /// Create a new order node (not yet linked)
    ///
    /// # Example
    ///
    /// ```
    /// use dark_pool::orderbook::OrderNode;
    /// use dark_pool::types::{Address, Direction, Order};
    ///
    /// let order = Order::new(1, Address::from_label("alice"), Direction::AtoB, 100, 90);
    /// let node = OrderNode::new(order);
    ///
    /// assert!(node.next.is_none());
    /// ```
    #[inline]
    pub fn new(order: Order) -> Self {
        Self { order, next: None }
    }

    /// Get the order ID
    #[inline]
    pub fn order_id(&self) -> u64 {
        self.order.id
    }

    /// Remaining escrowed amount
    #[inline]
    pub fn amount_in(&self) -> Amount {
        self.order.amount_in
    }
}
