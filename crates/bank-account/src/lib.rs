//! Bank account exercise.
//!
//! A [`BankAccount`] holds a balance and supports deposits, withdrawals,
//! transfers to other accounts, and reconciliation against an external
//! balance service. Precondition violations surface as [`AccountError`]
//! variants carrying the context a caller needs to react.
//!
//! The external service sits behind the [`BalanceSource`] port. The crate
//! ships a [`SimulatedBalanceService`] that mimics a flaky remote inquiry,
//! and tests substitute their own doubles.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use bank_account::{AccountError, BankAccount, FixtureBalanceSource};
//!
//! let source = Arc::new(FixtureBalanceSource::new(None));
//! let mut savings = BankAccount::new(30, Arc::clone(&source));
//! let mut current = BankAccount::new(20, source);
//!
//! savings.transfer(20, &mut current).expect("sufficient funds");
//! assert_eq!(savings.balance(), 10);
//! assert_eq!(current.balance(), 40);
//!
//! assert_eq!(
//!     savings.withdraw(11),
//!     Err(AccountError::InsufficientFunds { balance: 10 })
//! );
//! ```

mod account;
mod account_id;
mod balance_source;
mod config;
mod error;
mod simulated;

pub use account::{Balance, BankAccount, bank_account};
pub use account_id::AccountId;
pub use balance_source::{BalanceSource, FixtureBalanceSource};
pub use config::BalanceServiceSettings;
pub use error::{AccountError, SettingsError};
pub use simulated::SimulatedBalanceService;
