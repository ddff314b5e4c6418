//! Error types for the dark pool.
//!
//! Every failure aborts the operation it occurred in; a failed submission
//! leaves queues and balances exactly as they were before the call.

use std::fmt;

use thiserror::Error;

use crate::types::{Address, Amount};

/// Which submitted amount failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountField {
    AmountIn,
    AmountOut,
}

impl fmt::Display for AmountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountField::AmountIn => f.write_str("amountIn"),
            AmountField::AmountOut => f.write_str("amountOut"),
        }
    }
}

/// Errors reported by a token service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("insufficient balance of {asset} for {account}: required {required}, available {available}")]
    InsufficientBalance {
        asset: Address,
        account: Address,
        required: Amount,
        available: Amount,
    },

    #[error("insufficient allowance of {asset} for spender {spender}: required {required}, available {available}")]
    InsufficientAllowance {
        asset: Address,
        spender: Address,
        required: Amount,
        available: Amount,
    },

    #[error("account {account} is frozen for {asset}")]
    Frozen { asset: Address, account: Address },

    #[error("arithmetic overflow in balance of {asset}")]
    Overflow { asset: Address },
}

/// Errors raised by the match loop itself
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("fill with order {resting_id} would deliver {delivered} but order {order_id} only wants {remaining}")]
    AskUnderflow {
        order_id: u64,
        resting_id: u64,
        remaining: Amount,
        delivered: Amount,
    },
}

/// Errors returned by `Pool::submit_swap_request`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("invalid amount: {0} must be greater than 0")]
    InvalidAmount(AmountField),

    #[error("escrow failed: {0}")]
    EscrowFailure(#[source] TokenError),

    #[error("transfer failed while settling order {order_id}: {source}")]
    TransferFailure { order_id: u64, source: TokenError },

    #[error(transparent)]
    Match(#[from] MatchError),
}

/// Errors returned by the pool registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("pool not found: {0}")]
    PoolNotFound(Address),
}

/// Errors loading engine configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}
