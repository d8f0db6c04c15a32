//! Wallet connection state and balance presentation.
//!
//! Wallet failures are shown inline and never reach the issue store or the
//! report workflow.

use std::fmt;

use tracing::warn;

use super::ports::{BalanceSource, IdentityProvider, WalletError};

/// Lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Validation errors raised by [`AccountAddress::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountAddressValidationError {
    Empty,
    ContainsWhitespace,
}

impl fmt::Display for AccountAddressValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "account address must not be empty"),
            Self::ContainsWhitespace => write!(f, "account address must not contain whitespace"),
        }
    }
}

impl std::error::Error for AccountAddressValidationError {}

/// Public key of a connected wallet account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountAddress(String);

impl AccountAddress {
    /// Validate a raw address string.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountAddressValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(AccountAddressValidationError::Empty);
        }
        if value.chars().any(char::is_whitespace) {
            return Err(AccountAddressValidationError::ContainsWhitespace);
        }
        Ok(Self(value))
    }

    /// Full address text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First and last four characters, as shown on the wallet button.
    pub fn abbreviated(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 8 {
            return self.0.clone();
        }
        let head: String = chars.iter().take(4).collect();
        let tail: String = chars.iter().skip(chars.len() - 4).collect();
        format!("{head}...{tail}")
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wallet connection lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected { account: AccountAddress },
}

impl ConnectionStatus {
    /// Connected account, if any.
    pub fn account(&self) -> Option<&AccountAddress> {
        match self {
            Self::Connected { account } => Some(account),
            Self::Disconnected | Self::Connecting => None,
        }
    }
}

/// An on-chain balance in lamports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Lamports(u64);

impl Lamports {
    /// Wrap a raw lamport amount.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw lamport amount.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Balance in SOL.
    ///
    /// ```
    /// use impact_client::domain::wallet::Lamports;
    ///
    /// assert_eq!(Lamports::new(1_500_000_000).as_sol(), 1.5);
    /// ```
    pub fn as_sol(self) -> f64 {
        self.0 as f64 / LAMPORTS_PER_SOL as f64
    }
}

impl fmt::Display for Lamports {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} SOL", self.as_sol())
    }
}

/// Inline message shown beside the wallet control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletMessage(String);

impl WalletMessage {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&WalletError> for WalletMessage {
    fn from(value: &WalletError) -> Self {
        let text = match value {
            WalletError::Rejected => "Wallet connection was cancelled.".to_owned(),
            WalletError::Connection { .. } => "Could not connect to wallet.".to_owned(),
            WalletError::Balance { .. } => "Could not load balance.".to_owned(),
        };
        Self(text)
    }
}

impl fmt::Display for WalletMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the balance widget should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceDisplay {
    NotConnected,
    Loaded(Lamports),
    Failed(WalletMessage),
}

impl fmt::Display for BalanceDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConnected => f.write_str("0 SOL"),
            Self::Loaded(lamports) => lamports.fmt(f),
            Self::Failed(message) => message.fmt(f),
        }
    }
}

/// Look up the balance for whatever account `status` holds.
pub async fn load_balance<B>(source: &B, status: &ConnectionStatus) -> BalanceDisplay
where
    B: BalanceSource + ?Sized,
{
    let Some(account) = status.account() else {
        return BalanceDisplay::NotConnected;
    };
    match source.balance(account).await {
        Ok(lamports) => BalanceDisplay::Loaded(lamports),
        Err(err) => {
            warn!(
                error = %err,
                kind = err.kind(),
                account = %account,
                "balance lookup failed"
            );
            BalanceDisplay::Failed(WalletMessage::from(&err))
        }
    }
}

/// Run the connect handshake, turning failures into an inline message.
pub async fn connect_wallet<I>(provider: &I) -> Result<AccountAddress, WalletMessage>
where
    I: IdentityProvider + ?Sized,
{
    provider.connect().await.map_err(|err| {
        warn!(error = %err, kind = err.kind(), "wallet connection failed");
        WalletMessage::from(&err)
    })
}
