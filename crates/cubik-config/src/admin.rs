//! Admin allow-list configuration.

use cubik_core::WalletAddress;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AdminConfig {
    /// Base58 wallet addresses allowed to manage projects.
    #[serde(default)]
    pub wallets: Vec<String>,
}

impl AdminConfig {
    /// Whether at least one admin wallet is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.wallets.is_empty()
    }

    /// Parse every configured wallet.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first malformed entry.
    pub fn wallet_addresses(&self) -> Result<Vec<WalletAddress>, ConfigError> {
        self.wallets
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                WalletAddress::parse(raw).map_err(|error| ConfigError::InvalidValue {
                    field: format!("admin.wallets[{index}]"),
                    reason: error.to_string(),
                })
            })
            .collect()
    }

    /// Like [`Self::wallet_addresses`], but an empty list is an error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when no wallet is listed, or
    /// `ConfigError::InvalidValue` for a malformed entry.
    pub fn require_wallet_addresses(&self) -> Result<Vec<WalletAddress>, ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "admin.wallets".into(),
                hint: "set [admin] wallets or CUBIK_ADMIN__WALLETS".into(),
            });
        }
        self.wallet_addresses()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_by_default() {
        let config = AdminConfig::default();
        assert!(!config.is_configured());
        assert!(config.wallet_addresses().unwrap().is_empty());
    }

    #[test]
    fn names_offending_index() {
        let config = AdminConfig {
            wallets: vec![
                "52atj3jAYAq33rdDi4usSNpAozFF1foPTuyw8vkD6mtQ".into(),
                "nope".into(),
            ],
        };
        let err = config.wallet_addresses().unwrap_err();
        assert!(err.to_string().contains("admin.wallets[1]"));
    }

    #[test]
    fn rejects_base58_that_is_not_a_public_key() {
        let config = AdminConfig {
            wallets: vec!["z".repeat(44)],
        };
        let err = config.wallet_addresses().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "admin.wallets[0]"));
    }

    #[test]
    fn require_rejects_empty_list() {
        let err = AdminConfig::default().require_wallet_addresses().unwrap_err();
        assert!(matches!(err, ConfigError::NotConfigured { ref section, .. } if section == "admin.wallets"));
    }
}
