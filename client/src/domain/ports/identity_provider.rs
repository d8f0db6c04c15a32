//! Driven port for the wallet identity provider.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::wallet::{AccountAddress, ConnectionStatus};

define_port_error! {
    /// Errors surfaced by wallet adapters.
    pub enum WalletError {
        /// The provider could not be reached.
        Connection { message: String } =>
            "wallet connection failed: {message}",
        /// The user declined the connection request.
        Rejected => "wallet connection rejected",
        /// The balance lookup failed.
        Balance { message: String } =>
            "wallet balance lookup failed: {message}",
    }
}

/// Port for connecting a wallet account.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Ask the user to connect and return the account address.
    async fn connect(&self) -> Result<AccountAddress, WalletError>;

    /// Drop the current connection.
    async fn disconnect(&self) -> Result<(), WalletError>;

    /// Connection state as the provider currently sees it.
    fn status(&self) -> ConnectionStatus;
}
