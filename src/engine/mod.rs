//! Matching engine module for the dark pool.
//!
//! ## Matching Rules
//!
//! - An incoming order matches only against the **opposite** direction
//! - Resting orders are visited **oldest first**; there are no price levels
//! - A resting order is compatible when the incoming order's remaining
//!   `amount_in` covers its whole remaining `amount_out`
//! - The first incompatible resting order ends the loop (no skip-ahead)
//! - Every fill consumes the resting order **completely**
//! - An unconsumed incoming remainder rests at the tail of its own queue
//!
//! ## Example
//!
//! ```
//! use dark_pool::engine::MatchingEngine;
//! use dark_pool::orderbook::OrderBook;
//! use dark_pool::types::{Address, Direction, Order};
//!
//! let mut book = OrderBook::with_capacity(16);
//!
//! // Resting order: offers 100 A, wants 90 B
//! let id = book.next_order_id();
//! book.enqueue(Order::new(id, Address::from_label("alice"), Direction::AtoB, 100, 90));
//!
//! // Incoming order: offers 90 B, wants 100 A
//! let id = book.next_order_id();
//! let incoming = Order::new(id, Address::from_label("bob"), Direction::BtoA, 90, 100);
//! let result = MatchingEngine::new().match_order(&book, incoming).unwrap();
//!
//! assert!(result.fully_filled());
//! assert_eq!(result.fills.len(), 1);
//! ```

pub mod matcher;

pub use matcher::{Disposition, Fill, MatchResult, MatchingEngine};
