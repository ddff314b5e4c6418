//! Fungible token service interface.
//!
//! The pool never inspects token internals. It pulls escrow with
//! `transfer_from` (the trader must have approved the pool beforehand) and
//! pushes proceeds out of custody with `transfer`.
//!
//! ## Atomicity
//!
//! The host execution model makes one submission all-or-nothing. A token
//! service exposes that model through `begin`/`commit`/`rollback`; the pool
//! drives them through a [`Transaction`] guard so that any failure inside a
//! submission undoes every transfer made by it.

pub mod ledger;
pub mod transaction;

pub use ledger::InMemoryLedger;
pub use transaction::Transaction;

use crate::error::TokenError;
use crate::types::{Address, Amount, AssetId};

/// Capability set of the fungible token service, keyed by asset.
pub trait TokenService {
    /// Balance of `account` in `asset`
    fn balance_of(&self, asset: &AssetId, account: &Address) -> Amount;

    /// Amount `spender` may still move out of `owner`'s balance
    fn allowance(&self, asset: &AssetId, owner: &Address, spender: &Address) -> Amount;

    /// Set the allowance of `spender` over `owner`'s balance
    fn approve(
        &mut self,
        asset: &AssetId,
        owner: &Address,
        spender: &Address,
        amount: Amount,
    ) -> Result<(), TokenError>;

    /// Move `amount` from `owner` to `recipient` on behalf of `spender`,
    /// consuming allowance
    fn transfer_from(
        &mut self,
        asset: &AssetId,
        spender: &Address,
        owner: &Address,
        recipient: &Address,
        amount: Amount,
    ) -> Result<(), TokenError>;

    /// Move `amount` from `from`'s own balance to `to`
    fn transfer(
        &mut self,
        asset: &AssetId,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), TokenError>;

    /// Open an atomic unit of work
    fn begin(&mut self);

    /// Make every change since `begin` permanent
    fn commit(&mut self);

    /// Undo every change since `begin`
    fn rollback(&mut self);
}
