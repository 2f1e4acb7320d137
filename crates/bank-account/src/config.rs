//! Simulated balance service configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::account::Balance;

const DEFAULT_MAX_BALANCE: Balance = 100;
const DEFAULT_FAILURE_PERCENT: u8 = 50;

/// Configuration values for [`SimulatedBalanceService`](crate::SimulatedBalanceService).
///
/// Unconfigured values fall back to the behaviour of the remote service being
/// simulated, which draws balances from `0..=100` and fails half of its
/// inquiries.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BALANCE_SERVICE")]
pub struct BalanceServiceSettings {
    /// Seed for reproducible draws. Entropy is used when unset.
    pub seed: Option<u64>,
    /// Inclusive upper bound of drawn balances.
    #[ortho_config(default = 100)]
    pub max_balance: Balance,
    /// Chance, in percent, that an inquiry yields no balance.
    #[ortho_config(default = 50)]
    pub failure_percent: u8,
}

impl BalanceServiceSettings {
    /// Settings matching the simulated remote service, without a seed.
    #[must_use]
    pub const fn defaults() -> Self {
        Self {
            seed: None,
            max_balance: DEFAULT_MAX_BALANCE,
            failure_percent: DEFAULT_FAILURE_PERCENT,
        }
    }
}
