//! In-memory token service with a transaction journal.
//!
//! Balances and allowances are tracked per asset. While a transaction is
//! open, every write records the previous value so `rollback` can restore
//! it exactly; `commit` discards the journal.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::error::TokenError;
use crate::token::TokenService;
use crate::types::{Address, Amount, AssetId};

type BalanceKey = (AssetId, Address);
type AllowanceKey = (AssetId, Address, Address);

#[derive(Debug, Clone)]
enum Undo {
    Balance(BalanceKey, Amount),
    Allowance(AllowanceKey, Amount),
    Supply(AssetId, Amount),
}

/// Token service for any number of assets, held in memory.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    balances: HashMap<BalanceKey, Amount>,
    allowances: HashMap<AllowanceKey, Amount>,
    supply: HashMap<AssetId, Amount>,
    /// Accounts that can neither send nor receive an asset
    frozen: HashSet<BalanceKey>,
    /// Undo log of the open transaction, if any
    journal: Option<Vec<Undo>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `amount` new units of `asset` for `account`
    pub fn mint(&mut self, asset: &AssetId, account: &Address, amount: Amount) -> Result<(), TokenError> {
        let supply = self.total_supply(asset);
        let new_supply = supply
            .checked_add(amount)
            .ok_or(TokenError::Overflow { asset: *asset })?;
        self.credit(asset, account, amount)?;
        self.record(Undo::Supply(*asset, supply));
        self.supply.insert(*asset, new_supply);
        Ok(())
    }

    /// Block `account` from sending or receiving `asset`
    pub fn freeze(&mut self, asset: &AssetId, account: &Address) {
        self.frozen.insert((*asset, *account));
    }

    pub fn unfreeze(&mut self, asset: &AssetId, account: &Address) {
        self.frozen.remove(&(*asset, *account));
    }

    /// Total minted units of `asset`
    pub fn total_supply(&self, asset: &AssetId) -> Amount {
        self.supply.get(asset).copied().unwrap_or(0)
    }

    /// Whether a transaction is open
    pub fn in_transaction(&self) -> bool {
        self.journal.is_some()
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    fn record(&mut self, undo: Undo) {
        if let Some(journal) = self.journal.as_mut() {
            journal.push(undo);
        }
    }

    fn set_balance(&mut self, asset: &AssetId, account: &Address, amount: Amount) {
        let key = (*asset, *account);
        let previous = self.balances.insert(key, amount).unwrap_or(0);
        self.record(Undo::Balance(key, previous));
    }

    fn set_allowance(&mut self, asset: &AssetId, owner: &Address, spender: &Address, amount: Amount) {
        let key = (*asset, *owner, *spender);
        let previous = self.allowances.insert(key, amount).unwrap_or(0);
        self.record(Undo::Allowance(key, previous));
    }

    fn ensure_not_frozen(&self, asset: &AssetId, account: &Address) -> Result<(), TokenError> {
        if self.frozen.contains(&(*asset, *account)) {
            return Err(TokenError::Frozen {
                asset: *asset,
                account: *account,
            });
        }
        Ok(())
    }

    fn credit(&mut self, asset: &AssetId, account: &Address, amount: Amount) -> Result<(), TokenError> {
        let balance = self.balance_of(asset, account);
        let new_balance = balance
            .checked_add(amount)
            .ok_or(TokenError::Overflow { asset: *asset })?;
        self.set_balance(asset, account, new_balance);
        Ok(())
    }

    fn move_balance(
        &mut self,
        asset: &AssetId,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        self.ensure_not_frozen(asset, from)?;
        self.ensure_not_frozen(asset, to)?;

        let available = self.balance_of(asset, from);
        if available < amount {
            return Err(TokenError::InsufficientBalance {
                asset: *asset,
                account: *from,
                required: amount,
                available,
            });
        }
        if from == to {
            return Ok(());
        }

        // Check the credit side before writing anything
        let to_balance = self
            .balance_of(asset, to)
            .checked_add(amount)
            .ok_or(TokenError::Overflow { asset: *asset })?;

        self.set_balance(asset, from, available - amount);
        self.set_balance(asset, to, to_balance);
        trace!(%asset, %from, %to, amount, "transfer");
        Ok(())
    }
}

impl TokenService for InMemoryLedger {
    fn balance_of(&self, asset: &AssetId, account: &Address) -> Amount {
        self.balances.get(&(*asset, *account)).copied().unwrap_or(0)
    }

    fn allowance(&self, asset: &AssetId, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(&(*asset, *owner, *spender))
            .copied()
            .unwrap_or(0)
    }

    fn approve(
        &mut self,
        asset: &AssetId,
        owner: &Address,
        spender: &Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        self.set_allowance(asset, owner, spender, amount);
        Ok(())
    }

    fn transfer_from(
        &mut self,
        asset: &AssetId,
        spender: &Address,
        owner: &Address,
        recipient: &Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        let allowed = self.allowance(asset, owner, spender);
        if allowed < amount {
            return Err(TokenError::InsufficientAllowance {
                asset: *asset,
                spender: *spender,
                required: amount,
                available: allowed,
            });
        }
        self.move_balance(asset, owner, recipient, amount)?;
        self.set_allowance(asset, owner, spender, allowed - amount);
        Ok(())
    }

    fn transfer(
        &mut self,
        asset: &AssetId,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        self.move_balance(asset, from, to, amount)
    }

    fn begin(&mut self) {
        debug_assert!(self.journal.is_none(), "nested transactions are not supported");
        self.journal = Some(Vec::new());
    }

    fn commit(&mut self) {
        self.journal = None;
    }

    fn rollback(&mut self) {
        let Some(journal) = self.journal.take() else {
            return;
        };
        for undo in journal.into_iter().rev() {
            match undo {
                Undo::Balance(key, amount) => {
                    self.balances.insert(key, amount);
                }
                Undo::Allowance(key, amount) => {
                    self.allowances.insert(key, amount);
                }
                Undo::Supply(asset, amount) => {
                    self.supply.insert(asset, amount);
                }
            }
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
