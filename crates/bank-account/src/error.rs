//! Error types for the bank-account crate.
//!
//! Account operations fail with [`AccountError`]; building the simulated
//! balance service from settings fails with [`SettingsError`]. Both follow the
//! workspace convention of `thiserror` enums with lower-case messages.

use thiserror::Error;

use crate::account::Balance;

/// Errors raised by [`BankAccount`](crate::BankAccount) operations.
///
/// The balance is never modified when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccountError {
    /// A withdrawal or transfer asked for more than the account holds.
    #[error("insufficient funds: cannot withdraw more than {balance}")]
    InsufficientFunds {
        /// Balance at the time of the failed request.
        balance: Balance,
    },

    /// The source and destination of a transfer are the same account.
    #[error("transfer failed")]
    TransferFailed,

    /// The balance service did not return a balance.
    #[error("synchronization failed")]
    SynchronizationFailed,

    /// An amount was zero or negative.
    #[error("amount must be positive, got {amount}")]
    InvalidAmount {
        /// The rejected amount.
        amount: Balance,
    },

    /// Adding the amount would overflow the balance.
    #[error("balance {balance} cannot absorb {amount}")]
    BalanceOverflow {
        /// Balance at the time of the failed request.
        balance: Balance,
        /// The amount that could not be added.
        amount: Balance,
    },
}

/// Errors raised when balance service settings are out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The upper bound for drawn balances is negative.
    #[error("max balance must not be negative, got {value}")]
    NegativeMaxBalance {
        /// The configured bound.
        value: Balance,
    },

    /// The failure chance is above 100 percent.
    #[error("failure percent must be between 0 and 100, got {value}")]
    FailurePercentOutOfRange {
        /// The configured percentage.
        value: u8,
    },
}
