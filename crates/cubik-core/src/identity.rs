use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

const PUBLIC_KEY_LEN: usize = 32;

/// A Solana wallet public key, kept in its base58 form.
///
/// Parsing decodes the key, so only strings that hold exactly
/// [`WalletAddress::KEY_LEN`] bytes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WalletAddress {
    text: String,
    key: [u8; PUBLIC_KEY_LEN],
}

impl WalletAddress {
    pub const KEY_LEN: usize = PUBLIC_KEY_LEN;

    /// Parse and validate a wallet address.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidWalletAddress` when the input is not
    /// base58 or does not decode to a 32-byte key.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let text = raw.trim();
        let invalid = |reason: String| CoreError::InvalidWalletAddress {
            address: raw.to_string(),
            reason,
        };

        let decoded = bs58::decode(text)
            .into_vec()
            .map_err(|error| invalid(error.to_string()))?;
        let key: [u8; Self::KEY_LEN] = decoded.as_slice().try_into().map_err(|_| {
            invalid(format!(
                "expected a {}-byte public key, decoded {} bytes",
                Self::KEY_LEN,
                decoded.len()
            ))
        })?;

        Ok(Self {
            text: text.to_string(),
            key,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Raw public key bytes.
    #[must_use]
    pub const fn public_key(&self) -> &[u8; Self::KEY_LEN] {
        &self.key
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl TryFrom<String> for WalletAddress {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<WalletAddress> for String {
    fn from(value: WalletAddress) -> Self {
        value.text
    }
}

/// A profile username: 1 to 15 ASCII letters or digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub const MAX_LEN: usize = 15;

    /// # Errors
    ///
    /// Returns `CoreError::Validation` for an empty or over-long name, or one
    /// containing anything but ASCII letters and digits.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if raw.is_empty() {
            return Err(CoreError::Validation("username is required".into()));
        }
        if raw.chars().count() > Self::MAX_LEN {
            return Err(CoreError::Validation(format!(
                "username '{raw}' is longer than {} characters",
                Self::MAX_LEN
            )));
        }
        if !raw.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            return Err(CoreError::Validation(format!(
                "username '{raw}' must be alphanumeric with no spaces"
            )));
        }
        Ok(Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Username {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}
