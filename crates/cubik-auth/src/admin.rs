//! Admin authorization.
//!
//! Who counts as an admin comes from an [`AuthorizationSource`]. The admin
//! controls are shown only when a wallet is connected, it matches the
//! wallet on the signed-in session, and the source recognizes it.

use std::collections::BTreeSet;

use cubik_config::{AdminConfig, ConfigError};
use cubik_core::WalletAddress;
use serde::Serialize;

/// Decides whether a wallet may manage projects.
pub trait AuthorizationSource {
    fn is_admin(&self, wallet: &WalletAddress) -> bool;
}

/// A fixed set of admin wallets, usually loaded from configuration.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    wallets: BTreeSet<WalletAddress>,
}

impl AllowList {
    #[must_use]
    pub fn new(wallets: impl IntoIterator<Item = WalletAddress>) -> Self {
        Self {
            wallets: wallets.into_iter().collect(),
        }
    }

    /// Build from the `[admin]` config section.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when an entry is not a wallet address.
    pub fn from_config(config: &AdminConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.wallet_addresses()?))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }
}

impl AuthorizationSource for AllowList {
    fn is_admin(&self, wallet: &WalletAddress) -> bool {
        self.wallets.contains(wallet)
    }
}

/// Outcome of the admin-controls gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "access", rename_all = "snake_case")]
pub enum AdminAccess {
    /// No wallet is connected.
    NotConnected,
    /// The connected wallet differs from the session's main wallet, or the
    /// session has none.
    WalletMismatch,
    /// The wallet is connected and matches, but is not an admin.
    NotAdmin,
    Granted { manage_path: String },
}

impl AdminAccess {
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted { .. })
    }
}

/// Run the admin-controls checks in order.
#[must_use]
pub fn admin_access(
    session_wallet: Option<&WalletAddress>,
    connected_wallet: Option<&WalletAddress>,
    source: &impl AuthorizationSource,
) -> AdminAccess {
    let Some(connected) = connected_wallet else {
        return AdminAccess::NotConnected;
    };

    if session_wallet != Some(connected) {
        tracing::debug!(wallet = %connected, "connected wallet does not match session wallet");
        return AdminAccess::WalletMismatch;
    }

    if !source.is_admin(connected) {
        return AdminAccess::NotAdmin;
    }

    tracing::debug!(wallet = %connected, "admin access granted");
    AdminAccess::Granted {
        manage_path: format!("/projects/admin?pubKey={connected}"),
    }
}
