//! Wallet sign-in configuration.

use serde::{Deserialize, Serialize};

/// Statement shown in the wallet's signing prompt.
pub const DEFAULT_STATEMENT: &str =
    "Welcome to Cubik a platform where community helps projects to grow";

fn default_statement() -> String {
    DEFAULT_STATEMENT.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SignInConfig {
    /// Human-readable part of the signed message. The CSRF token is appended.
    #[serde(default = "default_statement")]
    pub statement: String,
}

impl Default for SignInConfig {
    fn default() -> Self {
        Self {
            statement: default_statement(),
        }
    }
}
