//! RAII guard for an atomic unit of token work.

use std::ops::{Deref, DerefMut};

use crate::token::TokenService;

/// Rolls back on drop unless committed.
///
/// ```
/// use dark_pool::token::{InMemoryLedger, TokenService, Transaction};
/// use dark_pool::types::Address;
///
/// let asset = Address::from_label("token-a");
/// let alice = Address::from_label("alice");
/// let bob = Address::from_label("bob");
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.mint(&asset, &alice, 100).unwrap();
///
/// {
///     let mut tx = Transaction::begin(&mut ledger);
///     tx.transfer(&asset, &alice, &bob, 40).unwrap();
///     // dropped without commit
/// }
/// assert_eq!(ledger.balance_of(&asset, &alice), 100);
/// ```
pub struct Transaction<'a, T: TokenService + ?Sized> {
    tokens: &'a mut T,
    committed: bool,
}

impl<'a, T: TokenService + ?Sized> Transaction<'a, T> {
    pub fn begin(tokens: &'a mut T) -> Self {
        tokens.begin();
        Self {
            tokens,
            committed: false,
        }
    }

    pub fn commit(mut self) {
        self.tokens.commit();
        self.committed = true;
    }
}

impl<T: TokenService + ?Sized> Deref for Transaction<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.tokens
    }
}

impl<T: TokenService + ?Sized> DerefMut for Transaction<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.tokens
    }
}

impl<T: TokenService + ?Sized> Drop for Transaction<'_, T> {
    fn drop(&mut self) {
        if !self.committed {
            self.tokens.rollback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::InMemoryLedger;
    use crate::types::Address;

    #[test]
    fn test_commit_keeps_changes() {
        let asset = Address::from_label("token-a");
        let alice = Address::from_label("alice");
        let bob = Address::from_label("bob");

        let mut ledger = InMemoryLedger::new();
        ledger.mint(&asset, &alice, 100).unwrap();

        let mut tx = Transaction::begin(&mut ledger);
        tx.transfer(&asset, &alice, &bob, 40).unwrap();
        tx.commit();

        assert_eq!(ledger.balance_of(&asset, &alice), 60);
        assert_eq!(ledger.balance_of(&asset, &bob), 40);
        assert!(!ledger.in_transaction());
    }

    #[test]
    fn test_drop_rolls_back() {
        let asset = Address::from_label("token-a");
        let alice = Address::from_label("alice");
        let bob = Address::from_label("bob");

        let mut ledger = InMemoryLedger::new();
        ledger.mint(&asset, &alice, 100).unwrap();
        ledger.approve(&asset, &alice, &bob, 70).unwrap();

        {
            let mut tx = Transaction::begin(&mut ledger);
            tx.transfer_from(&asset, &bob, &alice, &bob, 70).unwrap();
            assert_eq!(tx.balance_of(&asset, &bob), 70);
        }

        assert_eq!(ledger.balance_of(&asset, &alice), 100);
        assert_eq!(ledger.balance_of(&asset, &bob), 0);
        assert_eq!(ledger.allowance(&asset, &alice, &bob), 70);
        assert!(!ledger.in_transaction());
    }
}
