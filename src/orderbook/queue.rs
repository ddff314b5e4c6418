//! FIFO queue of resting orders for one direction.
//!
//! ## Queue Structure
//!
//! ```text
//! head (oldest) -> order2 -> order3 -> tail (newest)
//! ```
//!
//! - New orders are appended at the tail
//! - Matching consumes orders from the head
//! - Nothing is ever removed from the middle

use slab::Slab;

use crate::orderbook::OrderNode;
use crate::types::{Amount, Direction, Order};

/// Resting orders of one direction, in arrival order.
///
/// The order data lives in the slab; this struct only holds the queue
/// metadata.
#[derive(Debug, Clone)]
pub struct OrderQueue {
    /// Direction of every order in this queue
    pub direction: Direction,

    /// Sum of `amount_in` over all queued orders (escrow owed to them)
    pub total_amount_in: Amount,

    /// Oldest order (slab key); the next one to be matched
    pub head: Option<usize>,

    /// Newest order (slab key)
    pub tail: Option<usize>,

    /// Number of queued orders
    pub len: usize,
}

impl OrderQueue {
    /// Create a new empty queue
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            total_amount_in: 0,
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Append an order node at the tail.
    ///
    /// # Panics
    ///
    /// Panics if the key doesn't exist in the slab
    pub fn push_back(&mut self, key: usize, slab: &mut Slab<OrderNode>) {
        let node = slab.get_mut(key).expect("Invalid slab key");
        debug_assert!(!node.order.is_consumed(), "consumed order must not be queued");
        debug_assert_eq!(node.order.direction(), self.direction);

        let amount_in = node.amount_in();
        node.next = None;

        if let Some(tail_key) = self.tail {
            let tail_node = slab.get_mut(tail_key).expect("Invalid tail key");
            tail_node.next = Some(key);
        } else {
            // Empty list - this is also the head
            self.head = Some(key);
        }

        self.tail = Some(key);
        self.len += 1;
        self.total_amount_in = self.total_amount_in.saturating_add(amount_in);
    }

    /// Unlink the head node and return its slab key.
    ///
    /// The node stays in the slab; the caller removes it.
    pub fn pop_front(&mut self, slab: &mut Slab<OrderNode>) -> Option<usize> {
        let key = self.head?;
        let node = slab.get_mut(key).expect("Invalid head key");
        let next = node.next.take();
        let amount_in = node.amount_in();

        self.head = next;
        if next.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        self.total_amount_in = self.total_amount_in.saturating_sub(amount_in);

        Some(key)
    }

    /// Slab key of the head order (oldest)
    #[inline]
    pub fn peek_front(&self) -> Option<usize> {
        self.head
    }

    /// Iterate orders oldest first
    pub fn iter<'a>(&self, slab: &'a Slab<OrderNode>) -> QueueIter<'a> {
        QueueIter {
            slab,
            cursor: self.head,
        }
    }
}

/// Oldest-first iterator over a queue
pub struct QueueIter<'a> {
    slab: &'a Slab<OrderNode>,
    cursor: Option<usize>,
}

impl<'a> Iterator for QueueIter<'a> {
    type Item = &'a Order;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.slab.get(self.cursor?)?;
        self.cursor = node.next;
        Some(&node.order)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
