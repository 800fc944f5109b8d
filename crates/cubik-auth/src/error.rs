use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing CSRF token; request a fresh one from the session provider")]
    MissingCsrfToken,

    #[error("wallet signature rejected for {wallet}")]
    SignatureRejected { wallet: String },

    /// The signature or key could not be checked at all.
    #[error("signature verifier failed: {0}")]
    Verifier(String),
}
