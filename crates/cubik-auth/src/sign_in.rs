//! Wallet sign-in message.
//!
//! The wallet signs `"<statement>-<csrf token>"`, so a signature is only
//! valid for the session that issued the token. Checking the signature
//! itself is delegated to a [`SignatureVerifier`]; [`Ed25519Verifier`]
//! checks the detached signatures Solana wallets produce.

use cubik_config::SignInConfig;
use cubik_core::WalletAddress;
use ed25519_dalek::{Signature, VerifyingKey};
use serde::Serialize;

use crate::AuthError;

/// The exact message a wallet is asked to sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInMessage {
    statement: String,
    csrf_token: String,
}

impl SignInMessage {
    /// # Errors
    ///
    /// Returns `AuthError::MissingCsrfToken` when the token is blank.
    pub fn new(statement: impl Into<String>, csrf_token: &str) -> Result<Self, AuthError> {
        let csrf_token = csrf_token.trim();
        if csrf_token.is_empty() {
            return Err(AuthError::MissingCsrfToken);
        }
        Ok(Self {
            statement: statement.into(),
            csrf_token: csrf_token.to_string(),
        })
    }

    /// Use the statement from the `[sign_in]` config section.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_config(config: &SignInConfig, csrf_token: &str) -> Result<Self, AuthError> {
        Self::new(config.statement.clone(), csrf_token)
    }

    #[must_use]
    pub fn text(&self) -> String {
        format!("{}-{}", self.statement, self.csrf_token)
    }

    /// UTF-8 bytes handed to the wallet for signing.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.text().into_bytes()
    }
}

/// Checks a detached wallet signature over a message.
///
/// Implementations wrap the actual ed25519 primitive; `signature` is in the
/// encoding the wallet adapter produced (base58 for Solana wallets).
pub trait SignatureVerifier {
    /// # Errors
    ///
    /// Returns `AuthError::Verifier` when the signature cannot be decoded or
    /// checked at all. A well-formed but wrong signature is `Ok(false)`.
    fn verify(
        &self,
        message: &[u8],
        signature: &str,
        wallet: &WalletAddress,
    ) -> Result<bool, AuthError>;
}

/// Detached ed25519 check with a base58-encoded signature, the format
/// Solana wallet adapters return from `signMessage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Verifier;

impl SignatureVerifier for Ed25519Verifier {
    fn verify(
        &self,
        message: &[u8],
        signature: &str,
        wallet: &WalletAddress,
    ) -> Result<bool, AuthError> {
        let key = VerifyingKey::from_bytes(wallet.public_key()).map_err(|error| {
            AuthError::Verifier(format!("{wallet} is not an ed25519 public key: {error}"))
        })?;
        let raw = bs58::decode(signature.trim())
            .into_vec()
            .map_err(|error| AuthError::Verifier(format!("signature is not base58: {error}")))?;
        let signature = Signature::from_slice(&raw).map_err(|_| {
            AuthError::Verifier(format!(
                "expected a {}-byte signature, decoded {} bytes",
                Signature::BYTE_SIZE,
                raw.len()
            ))
        })?;
        Ok(key.verify_strict(message, &signature).is_ok())
    }
}

/// Verify a sign-in signature, turning a `false` verdict into an error.
///
/// # Errors
///
/// Returns `AuthError::SignatureRejected` when the verifier says no, or
/// propagates the verifier's own error.
pub fn verify_sign_in(
    verifier: &impl SignatureVerifier,
    message: &SignInMessage,
    signature: &str,
    wallet: &WalletAddress,
) -> Result<(), AuthError> {
    let accepted = verifier.verify(&message.to_bytes(), signature, wallet)?;
    tracing::debug!(wallet = %wallet, accepted, "verified sign-in signature");
    if accepted {
        Ok(())
    } else {
        Err(AuthError::SignatureRejected {
            wallet: wallet.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubik_config::DEFAULT_STATEMENT;
    use pretty_assertions::assert_eq;

    const WALLET: &str = "52atj3jAYAq33rdDi4usSNpAozFF1foPTuyw8vkD6mtQ";

    /// Accepts only a signature equal to the expected message text.
    struct EchoVerifier;

    impl SignatureVerifier for EchoVerifier {
        fn verify(
            &self,
            message: &[u8],
            signature: &str,
            _wallet: &WalletAddress,
        ) -> Result<bool, AuthError> {
            if signature.is_empty() {
                return Err(AuthError::Verifier("empty signature".into()));
            }
            Ok(message == signature.as_bytes())
        }
    }

    fn wallet() -> WalletAddress {
        WalletAddress::parse(WALLET).unwrap()
    }

    #[test]
    fn message_joins_statement_and_token() {
        let message = SignInMessage::from_config(&SignInConfig::default(), "abc123").unwrap();
        assert_eq!(message.text(), format!("{DEFAULT_STATEMENT}-abc123"));
        assert_eq!(message.to_bytes(), message.text().as_bytes());
    }

    #[test]
    fn blank_token_is_rejected() {
        assert!(matches!(
            SignInMessage::new("hi", "  "),
            Err(AuthError::MissingCsrfToken)
        ));
    }

    #[test]
    fn matching_signature_is_accepted() {
        let message = SignInMessage::new("hi", "tok").unwrap();
        verify_sign_in(&EchoVerifier, &message, "hi-tok", &wallet()).unwrap();
    }

    #[test]
    fn signature_for_other_session_is_rejected() {
        let message = SignInMessage::new("hi", "tok").unwrap();
        let err = verify_sign_in(&EchoVerifier, &message, "hi-other", &wallet()).unwrap_err();
        assert!(matches!(err, AuthError::SignatureRejected { ref wallet } if wallet == WALLET));
    }

    mod ed25519 {
        use ed25519_dalek::{Signer, SigningKey};

        use super::*;

        fn signer() -> SigningKey {
            SigningKey::from_bytes(&[7; 32])
        }

        fn signer_wallet(key: &SigningKey) -> WalletAddress {
            WalletAddress::parse(&bs58::encode(key.verifying_key().to_bytes()).into_string())
                .unwrap()
        }

        fn sign(key: &SigningKey, message: &SignInMessage) -> String {
            bs58::encode(key.sign(&message.to_bytes()).to_bytes()).into_string()
        }

        #[test]
        fn accepts_wallet_signature() {
            let key = signer();
            let message = SignInMessage::new(DEFAULT_STATEMENT, "csrf-1").unwrap();
            let signature = sign(&key, &message);

            verify_sign_in(&Ed25519Verifier, &message, &signature, &signer_wallet(&key)).unwrap();
        }

        #[test]
        fn rejects_signature_for_another_token() {
            let key = signer();
            let signed = SignInMessage::new(DEFAULT_STATEMENT, "csrf-1").unwrap();
            let presented = SignInMessage::new(DEFAULT_STATEMENT, "csrf-2").unwrap();
            let signature = sign(&key, &signed);

            let err = verify_sign_in(&Ed25519Verifier, &presented, &signature, &signer_wallet(&key))
                .unwrap_err();
            assert!(matches!(err, AuthError::SignatureRejected { .. }));
        }

        #[test]
        fn rejects_signature_from_another_wallet() {
            let key = signer();
            let other = SigningKey::from_bytes(&[9; 32]);
            let message = SignInMessage::new(DEFAULT_STATEMENT, "csrf-1").unwrap();
            let signature = sign(&other, &message);

            let verdict = Ed25519Verifier
                .verify(&message.to_bytes(), &signature, &signer_wallet(&key))
                .unwrap();
            assert!(!verdict);
        }

        #[test]
        fn malformed_signatures_are_verifier_errors() {
            let key = signer();
            let message = SignInMessage::new(DEFAULT_STATEMENT, "csrf-1").unwrap();
            for bad in ["not-base58-0OIl", "3yZe7d"] {
                let err = verify_sign_in(&Ed25519Verifier, &message, bad, &signer_wallet(&key))
                    .unwrap_err();
                assert!(matches!(err, AuthError::Verifier(_)), "{bad}");
            }
        }
    }

    #[test]
    fn verifier_errors_propagate() {
        let message = SignInMessage::new("hi", "tok").unwrap();
        let err = verify_sign_in(&EchoVerifier, &message, "", &wallet()).unwrap_err();
        assert!(matches!(err, AuthError::Verifier(_)));
    }
}
