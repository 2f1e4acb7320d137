//! In-process stand-in for the remote balance inquiry service.
//!
//! Each inquiry draws a balance uniformly from `0..=max_balance` and then
//! decides, with `failure_percent` chance, to withhold it. Seeding the RNG
//! makes the sequence of answers reproducible.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::account::Balance;
use crate::account_id::AccountId;
use crate::balance_source::BalanceSource;
use crate::config::BalanceServiceSettings;
use crate::error::SettingsError;

/// Upper bound, exclusive, of the failure draw.
const PERCENT: u8 = 100;

/// Balance service simulating a flaky remote inquiry.
#[derive(Debug)]
pub struct SimulatedBalanceService {
    rng: Mutex<ChaCha8Rng>,
    max_balance: Balance,
    failure_percent: u8,
}

impl SimulatedBalanceService {
    /// Build a service from validated settings.
    ///
    /// # Errors
    ///
    /// - [`SettingsError::NegativeMaxBalance`] when `max_balance` is below zero.
    /// - [`SettingsError::FailurePercentOutOfRange`] when `failure_percent`
    ///   exceeds 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use bank_account::{BalanceServiceSettings, SimulatedBalanceService};
    ///
    /// let settings = BalanceServiceSettings {
    ///     seed: Some(7),
    ///     max_balance: 10,
    ///     failure_percent: 0,
    /// };
    /// let service = SimulatedBalanceService::from_settings(&settings).expect("valid settings");
    /// assert_eq!(service.max_balance(), 10);
    /// ```
    pub fn from_settings(settings: &BalanceServiceSettings) -> Result<Self, SettingsError> {
        let max_balance = settings.max_balance;
        if max_balance < 0 {
            return Err(SettingsError::NegativeMaxBalance { value: max_balance });
        }
        let failure_percent = settings.failure_percent;
        if failure_percent > PERCENT {
            return Err(SettingsError::FailurePercentOutOfRange {
                value: failure_percent,
            });
        }
        let rng = settings
            .seed
            .map_or_else(|| ChaCha8Rng::from_rng(&mut rand::rng()), ChaCha8Rng::seed_from_u64);
        Ok(Self {
            rng: Mutex::new(rng),
            max_balance,
            failure_percent,
        })
    }

    /// Inclusive upper bound of drawn balances.
    #[must_use]
    pub const fn max_balance(&self) -> Balance {
        self.max_balance
    }

    /// Chance, in percent, that an inquiry yields no balance.
    #[must_use]
    pub const fn failure_percent(&self) -> u8 {
        self.failure_percent
    }

    fn draw(&self) -> Option<Balance> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let balance = rng.random_range(0..=self.max_balance);
        let failed = rng.random_range(0..PERCENT) < self.failure_percent;
        (!failed).then_some(balance)
    }
}

impl Default for SimulatedBalanceService {
    /// Entropy-seeded service with the default bounds.
    fn default() -> Self {
        let defaults = BalanceServiceSettings::defaults();
        Self {
            rng: Mutex::new(ChaCha8Rng::from_rng(&mut rand::rng())),
            max_balance: defaults.max_balance,
            failure_percent: defaults.failure_percent,
        }
    }
}

#[async_trait]
impl BalanceSource for SimulatedBalanceService {
    async fn fetch_balance(&self, account_id: &AccountId) -> Option<Balance> {
        let drawn = self.draw();
        match drawn {
            Some(balance) => debug!(%account_id, balance, "simulated inquiry answered"),
            None => debug!(%account_id, "simulated inquiry failed"),
        }
        drawn
    }
}
