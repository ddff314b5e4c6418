//! # Dark Pool
//!
//! Private two-asset swap matching with escrowed custody.
//!
//! ## Architecture
//!
//! - **Types**: Core data structures (Order, FulfillmentRecord, SubmissionReceipt)
//! - **OrderBook**: Two FIFO queues per pool with slab-based storage
//! - **Engine**: Deterministic match loop, free of side effects
//! - **Token**: Fungible token service interface and an in-memory ledger
//! - **Pool**: Escrow, matching and settlement for one asset pair
//! - **Registry**: Creates and tracks pools
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Identical submission histories produce identical state roots
//! 2. **No Floating Point**: Amounts are integer base units (`u128`)
//! 3. **Atomic Submissions**: A failed submission changes nothing
//! 4. **Hidden Depth**: Only per-direction counts of resting orders are public
//!
//! ## Example
//!
//! ```
//! use dark_pool::config::EngineConfig;
//! use dark_pool::registry::PoolRegistry;
//! use dark_pool::token::{InMemoryLedger, TokenService};
//! use dark_pool::types::{Address, Direction};
//!
//! let a = Address::from_label("token-a");
//! let b = Address::from_label("token-b");
//! let alice = Address::from_label("alice");
//! let bob = Address::from_label("bob");
//!
//! let mut ledger = InMemoryLedger::new();
//! let mut registry = PoolRegistry::new(Address::from_label("registry"), EngineConfig::default());
//! let id = registry.create_pool(alice, a, b);
//!
//! ledger.mint(&a, &alice, 100).unwrap();
//! ledger.mint(&b, &bob, 90).unwrap();
//! ledger.approve(&a, &alice, &id, 100).unwrap();
//! ledger.approve(&b, &bob, &id, 90).unwrap();
//!
//! let pool = registry.pool_mut(&id).unwrap();
//! pool.submit_swap_request(&mut ledger, alice, 100, 90, Direction::AtoB).unwrap();
//! pool.submit_swap_request(&mut ledger, bob, 90, 100, Direction::BtoA).unwrap();
//!
//! assert_eq!(ledger.balance_of(&b, &alice), 90);
//! assert_eq!(ledger.balance_of(&a, &bob), 100);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Address, Order, FulfillmentRecord, SubmissionReceipt
pub mod types;

/// Order book: per-direction FIFO queues with slab-based storage
pub mod orderbook;

/// Matching engine: Deterministic order matching
pub mod engine;

/// Fungible token service interface
pub mod token;

pub mod config;
pub mod error;
pub mod pool;
pub mod registry;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::{EngineConfig, ZeroAskPolicy};
pub use engine::{MatchResult, MatchingEngine};
pub use error::{MatchError, RegistryError, SubmitError, TokenError};
pub use orderbook::OrderBook;
pub use pool::Pool;
pub use registry::PoolRegistry;
pub use token::{InMemoryLedger, TokenService};
pub use types::{Address, Amount, Direction, FulfillmentRecord, Order, Outcome, SubmissionReceipt};
