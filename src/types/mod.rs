//! Core data types for the dark pool
//!
//! Orders and records implement SSZ serialization for deterministic encoding.
//! All amounts are integer base units (`u128`).
//!
//! ## Types
//!
//! - [`Address`]: 20-byte identity of an account, asset or pool
//! - [`Order`]: A swap order, resting or in flight
//! - [`Direction`]: AtoB or BtoA
//! - [`FulfillmentRecord`]: One side of an executed fill
//! - [`PoolCreated`]: Registry creation record
//! - [`SubmissionReceipt`]: Output of one submission

mod address;
mod fill;
mod order;
mod receipt;
pub mod amount;

pub use address::{Address, AddressParseError, AssetId, PoolId, ADDRESS_LEN};
pub use amount::Amount;
pub use fill::{FulfillmentRecord, PoolCreated};
pub use order::{Direction, Order};
pub use receipt::{Outcome, SubmissionReceipt};
