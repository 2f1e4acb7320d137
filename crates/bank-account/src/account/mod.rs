//! The bank account entity.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::account_id::AccountId;
use crate::balance_source::BalanceSource;
use crate::error::AccountError;
use crate::simulated::SimulatedBalanceService;

/// Amount of money in whole currency units.
pub type Balance = i64;

/// An account holding a balance, reconciled against a [`BalanceSource`].
///
/// ## Invariants
/// - Every failed operation leaves the balance exactly as it was.
/// - A transfer conserves the sum of both balances.
///
/// The initial balance is not validated, so an account may be opened with a
/// negative balance; it can then receive deposits but not fund withdrawals.
pub struct BankAccount<S: ?Sized> {
    id: AccountId,
    balance: Balance,
    source: Arc<S>,
}

/// Open an account backed by the default [`SimulatedBalanceService`].
///
/// # Examples
///
/// ```
/// use bank_account::bank_account;
///
/// let account = bank_account(2);
/// assert_eq!(account.balance(), 2);
/// ```
#[must_use]
pub fn bank_account(initial_balance: Balance) -> BankAccount<SimulatedBalanceService> {
    BankAccount::new(initial_balance, Arc::new(SimulatedBalanceService::default()))
}

impl<S: ?Sized> BankAccount<S> {
    /// Open a new account with a fresh identity.
    #[must_use]
    pub fn new(initial_balance: Balance, source: Arc<S>) -> Self {
        Self::with_id(AccountId::random(), initial_balance, source)
    }

    /// Rebuild a handle for an existing account identity.
    #[must_use]
    pub const fn with_id(id: AccountId, initial_balance: Balance, source: Arc<S>) -> Self {
        Self {
            id,
            balance: initial_balance,
            source,
        }
    }

    /// Identity of the account.
    #[must_use]
    pub const fn id(&self) -> AccountId {
        self.id
    }

    /// Current balance.
    #[must_use]
    pub const fn balance(&self) -> Balance {
        self.balance
    }

    /// Add `amount` to the balance.
    ///
    /// # Errors
    ///
    /// - [`AccountError::InvalidAmount`] when `amount` is not positive.
    /// - [`AccountError::BalanceOverflow`] when the sum does not fit.
    pub fn deposit(&mut self, amount: Balance) -> Result<(), AccountError> {
        self.balance = self.credited(amount)?;
        debug!(account_id = %self.id, amount, balance = self.balance, "deposit applied");
        Ok(())
    }

    /// Remove `amount` from the balance.
    ///
    /// # Errors
    ///
    /// - [`AccountError::InvalidAmount`] when `amount` is not positive.
    /// - [`AccountError::InsufficientFunds`] when `amount` exceeds the
    ///   balance; the error carries the balance at failure time.
    pub fn withdraw(&mut self, amount: Balance) -> Result<(), AccountError> {
        self.balance = self.debited(amount)?;
        debug!(account_id = %self.id, amount, balance = self.balance, "withdrawal applied");
        Ok(())
    }

    /// Move `amount` from this account into `target`.
    ///
    /// Both new balances are computed before either is written, so a failed
    /// transfer leaves both accounts untouched.
    ///
    /// # Errors
    ///
    /// - [`AccountError::TransferFailed`] when `target` is this account,
    ///   whatever the amount.
    /// - Any error [`withdraw`](Self::withdraw) would raise on this account.
    /// - Any error [`deposit`](Self::deposit) would raise on `target`.
    pub fn transfer<T: ?Sized>(
        &mut self,
        amount: Balance,
        target: &mut BankAccount<T>,
    ) -> Result<(), AccountError> {
        if self.id == target.id {
            return Err(AccountError::TransferFailed);
        }
        let debited = self.debited(amount)?;
        let credited = target.credited(amount)?;
        self.balance = debited;
        target.balance = credited;
        debug!(
            from = %self.id,
            to = %target.id,
            amount,
            "transfer applied"
        );
        Ok(())
    }

    fn credited(&self, amount: Balance) -> Result<Balance, AccountError> {
        ensure_positive(amount)?;
        self.balance
            .checked_add(amount)
            .ok_or(AccountError::BalanceOverflow {
                balance: self.balance,
                amount,
            })
    }

    fn debited(&self, amount: Balance) -> Result<Balance, AccountError> {
        ensure_positive(amount)?;
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                balance: self.balance,
            });
        }
        // 0 < amount <= balance, so the difference cannot underflow.
        Ok(self.balance - amount)
    }
}

impl<S: BalanceSource + ?Sized> BankAccount<S> {
    /// Ask the balance service for this account's authoritative balance.
    ///
    /// Returns `None` when the service could not answer.
    pub async fn fetch_balance(&self) -> Option<Balance> {
        self.source.fetch_balance(&self.id).await
    }

    /// Replace the local balance with the one held by the balance service.
    ///
    /// # Errors
    ///
    /// [`AccountError::SynchronizationFailed`] when the service returns no
    /// balance; the local balance is then left unchanged.
    pub async fn synchronize_balance(&mut self) -> Result<(), AccountError> {
        let fetched = self
            .fetch_balance()
            .await
            .ok_or(AccountError::SynchronizationFailed)?;
        debug!(
            account_id = %self.id,
            previous = self.balance,
            balance = fetched,
            "balance synchronized"
        );
        self.balance = fetched;
        Ok(())
    }
}

impl<S: ?Sized> fmt::Debug for BankAccount<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BankAccount")
            .field("id", &self.id)
            .field("balance", &self.balance)
            .finish_non_exhaustive()
    }
}

const fn ensure_positive(amount: Balance) -> Result<(), AccountError> {
    if amount > 0 {
        Ok(())
    } else {
        Err(AccountError::InvalidAmount { amount })
    }
}
