//! Driven port for the external balance inquiry service.
//!
//! Accounts only know the contract: an asynchronous lookup that answers with
//! a balance, or with nothing when the inquiry did not succeed.

use async_trait::async_trait;

use crate::account::Balance;
use crate::account_id::AccountId;

/// Port for looking up the authoritative balance of an account.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BalanceSource: Send + Sync {
    /// Fetch the current balance held by the external service.
    ///
    /// Returns `None` when the service could not provide a balance.
    ///
    /// # Examples
    ///
    /// ```
    /// use bank_account::{AccountId, BalanceSource, FixtureBalanceSource};
    ///
    /// let source = FixtureBalanceSource::new(Some(50));
    /// let balance = futures::executor::block_on(source.fetch_balance(&AccountId::random()));
    /// assert_eq!(balance, Some(50));
    /// ```
    async fn fetch_balance(&self, account_id: &AccountId) -> Option<Balance>;
}

/// Fixture implementation answering every inquiry with the same result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixtureBalanceSource {
    balance: Option<Balance>,
}

impl FixtureBalanceSource {
    /// Create a fixture that always answers with `balance`.
    #[must_use]
    pub const fn new(balance: Option<Balance>) -> Self {
        Self { balance }
    }
}

#[async_trait]
impl BalanceSource for FixtureBalanceSource {
    async fn fetch_balance(&self, _account_id: &AccountId) -> Option<Balance> {
        self.balance
    }
}
