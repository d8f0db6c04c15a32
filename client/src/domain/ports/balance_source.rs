//! Driven port for reading an account balance.

use async_trait::async_trait;

use super::WalletError;
use crate::domain::wallet::{AccountAddress, Lamports};

/// Port for balance lookups against the ledger.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BalanceSource: Send + Sync {
    /// Current balance of `account`.
    async fn balance(&self, account: &AccountAddress) -> Result<Lamports, WalletError>;
}

/// Fixture returning the same balance for every account.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureBalanceSource(pub Lamports);

#[async_trait]
impl BalanceSource for FixtureBalanceSource {
    async fn balance(&self, _account: &AccountAddress) -> Result<Lamports, WalletError> {
        Ok(self.0)
    }
}
