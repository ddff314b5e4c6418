//! Two-queue order book for one asset pair.
//!
//! ## Architecture
//!
//! - **Slab**: Pre-allocated storage shared by both queues
//! - **OrderQueue** (x2): FIFO per direction, threaded through the slab
//!
//! There are no price levels. Orders of one direction are kept strictly in
//! arrival order and are only ever consumed from the head.
//!
//! ## Example
//!
//! ```
//! use dark_pool::orderbook::OrderBook;
//! use dark_pool::types::{Address, Direction};
//!
//! let mut book = OrderBook::with_capacity(16);
//! let id = book.next_order_id();
//! book.enqueue(dark_pool::types::Order::new(id, Address::from_label("alice"), Direction::AtoB, 100, 90));
//!
//! assert_eq!(book.pending_count(Direction::AtoB), 1);
//! assert_eq!(book.pending_count(Direction::BtoA), 0);
//! ```

use sha2::{Digest, Sha256};
use slab::Slab;

use crate::orderbook::{OrderNode, OrderQueue, QueueIter};
use crate::types::{Amount, Direction, Order};

/// Resting orders of one pool
#[derive(Debug)]
pub struct OrderBook {
    /// Pre-allocated order storage
    orders: Slab<OrderNode>,

    /// Orders offering asset A
    a_to_b: OrderQueue,

    /// Orders offering asset B
    b_to_a: OrderQueue,

    /// Next order ID to assign
    next_order_id: u64,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    /// Create a new empty book
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a book with pre-allocated capacity
    ///
    /// ```
    /// use dark_pool::orderbook::OrderBook;
    ///
    /// let book = OrderBook::with_capacity(1_000);
    /// assert!(book.capacity() >= 1_000);
    /// ```
    pub fn with_capacity(order_capacity: usize) -> Self {
        Self {
            orders: Slab::with_capacity(order_capacity),
            a_to_b: OrderQueue::new(Direction::AtoB),
            b_to_a: OrderQueue::new(Direction::BtoA),
            next_order_id: 1,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    #[inline]
    pub fn capacity(&self) -> usize {
        self.orders.capacity()
    }

    /// Total resting orders across both directions
    #[inline]
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Number of resting orders offering in `direction`
    #[inline]
    pub fn pending_count(&self, direction: Direction) -> usize {
        self.queue(direction).len()
    }

    /// Escrow currently owed to resting orders of `direction`
    #[inline]
    pub fn escrowed(&self, direction: Direction) -> Amount {
        self.queue(direction).total_amount_in
    }

    #[inline]
    pub fn queue(&self, direction: Direction) -> &OrderQueue {
        match direction {
            Direction::AtoB => &self.a_to_b,
            Direction::BtoA => &self.b_to_a,
        }
    }

    // ========================================================================
    // Order Management
    // ========================================================================

    /// Take the next order ID
    #[inline]
    pub fn next_order_id(&mut self) -> u64 {
        let id = self.next_order_id;
        self.next_order_id += 1;
        id
    }

    /// Peek the next order ID without taking it
    #[inline]
    pub fn peek_next_order_id(&self) -> u64 {
        self.next_order_id
    }

    /// Append an order at the tail of its direction's queue.
    ///
    /// # Returns
    ///
    /// The slab key for the queued order
    pub fn enqueue(&mut self, order: Order) -> usize {
        let direction = order.direction();
        let key = self.orders.insert(OrderNode::new(order));
        let queue = match direction {
            Direction::AtoB => &mut self.a_to_b,
            Direction::BtoA => &mut self.b_to_a,
        };
        queue.push_back(key, &mut self.orders);
        key
    }

    /// Remove and return the oldest order of `direction`
    pub fn pop_front(&mut self, direction: Direction) -> Option<Order> {
        let queue = match direction {
            Direction::AtoB => &mut self.a_to_b,
            Direction::BtoA => &mut self.b_to_a,
        };
        let key = queue.pop_front(&mut self.orders)?;
        Some(self.orders.remove(key).order)
    }

    /// Oldest order of `direction`
    pub fn front(&self, direction: Direction) -> Option<&Order> {
        let key = self.queue(direction).peek_front()?;
        self.orders.get(key).map(|node| &node.order)
    }

    /// Iterate resting orders of `direction`, oldest first
    pub fn iter(&self, direction: Direction) -> QueueIter<'_> {
        self.queue(direction).iter(&self.orders)
    }

    // ========================================================================
    // State Commitment
    // ========================================================================

    /// SHA-256 over the SSZ encoding of both queues in FIFO order.
    ///
    /// Identical submission histories yield identical roots.
    pub fn compute_state_root(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.next_order_id.to_le_bytes());

        for direction in Direction::ALL {
            hasher.update([direction.to_u8()]);
            hasher.update((self.pending_count(direction) as u64).to_le_bytes());
            for order in self.iter(direction) {
                // A fixed-size container of basic types always serializes
                if let Ok(bytes) = ssz_rs::serialize(order) {
                    hasher.update(&bytes);
                }
            }
        }

        let mut root = [0u8; 32];
        root.copy_from_slice(&hasher.finalize());
        root
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
