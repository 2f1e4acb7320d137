//! Test doubles shared by the bank-account integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bank_account::{AccountId, Balance, BalanceSource};

/// Balance source that records inquiries and returns a configured answer.
#[derive(Clone, Default)]
pub struct RecordingBalanceSource {
    calls: Arc<Mutex<Vec<AccountId>>>,
    response: Arc<Mutex<Option<Balance>>>,
}

impl RecordingBalanceSource {
    /// Account identifiers passed to `fetch_balance`, in call order.
    pub fn calls(&self) -> Vec<AccountId> {
        self.calls.lock().expect("balance source calls lock").clone()
    }

    /// Replace the answer returned by subsequent inquiries.
    pub fn set_response(&self, response: Option<Balance>) {
        *self.response.lock().expect("balance source response lock") = response;
    }
}

#[async_trait]
impl BalanceSource for RecordingBalanceSource {
    async fn fetch_balance(&self, account_id: &AccountId) -> Option<Balance> {
        self.calls
            .lock()
            .expect("balance source calls lock")
            .push(*account_id);
        *self.response.lock().expect("balance source response lock")
    }
}
