//! Order book module for the dark pool.
//!
//! ## Architecture
//!
//! Each pool keeps two private FIFO queues, one per trading direction:
//!
//! - **Slab-based storage**: O(1) order insertion and removal
//! - **No price levels**: orders are matched strictly oldest-first
//! - **Hidden depth**: nothing about resting orders is published except the
//!   per-direction count
//!
//! ## Components
//!
//! - [`OrderNode`]: Wrapper around `Order` with a successor link
//! - [`OrderQueue`]: FIFO of one direction
//! - [`OrderBook`]: Both queues plus the shared slab
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Enqueue | O(1) |
//! | Pop oldest | O(1) |
//! | Pending count | O(1) |
//! | State root | O(n) |

pub mod node;
pub mod queue;
pub mod book;

pub use node::OrderNode;
pub use queue::{OrderQueue, QueueIter};
pub use book::OrderBook;
