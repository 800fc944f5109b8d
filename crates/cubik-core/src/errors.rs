//! Cross-cutting error types for Cubik.
//!
//! Domain-specific errors (`ConfigError`, `AuthError`) live in their own
//! crates. The CLI converges everything into `anyhow::Error`.

use thiserror::Error;

/// Errors that can be raised by any Cubik crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (ordering, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A string could not be parsed as a Solana wallet address.
    #[error("Invalid wallet address '{address}': {reason}")]
    InvalidWalletAddress { address: String, reason: String },
}
