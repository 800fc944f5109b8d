use anyhow::Context;
use cubik_auth::{Ed25519Verifier, SignInMessage, verify_sign_in};
use cubik_config::SignInConfig;
use cubik_core::WalletAddress;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SignInCommands, SignInVerifyArgs};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SignInMessageResponse {
    message: String,
    bytes: usize,
}

#[derive(Debug, Serialize)]
struct SignInVerifyResponse {
    wallet: String,
    verified: bool,
}

pub fn handle(action: &SignInCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        SignInCommands::Message(args) => {
            let message = SignInMessage::from_config(&ctx.config.sign_in, &args.csrf)?;
            let response = SignInMessageResponse {
                bytes: message.to_bytes().len(),
                message: message.text(),
            };
            output(&response, flags.format)
        }
        SignInCommands::Verify(args) => output(&verify(args, &ctx.config.sign_in)?, flags.format),
    }
}

/// A rejected signature is an error, so the command exits non-zero.
fn verify(args: &SignInVerifyArgs, config: &SignInConfig) -> anyhow::Result<SignInVerifyResponse> {
    let wallet = WalletAddress::parse(&args.wallet).context("invalid --wallet")?;
    let message = SignInMessage::from_config(config, &args.csrf)?;
    verify_sign_in(&Ed25519Verifier, &message, &args.signature, &wallet)?;
    Ok(SignInVerifyResponse {
        wallet: wallet.to_string(),
        verified: true,
    })
}

#[cfg(test)]
mod tests {
    use ed25519_dalek::{Signer, SigningKey};

    use super::*;

    fn signed_args(csrf: &str, signed_csrf: &str) -> SignInVerifyArgs {
        let key = SigningKey::from_bytes(&[3; 32]);
        let signed = SignInMessage::from_config(&SignInConfig::default(), signed_csrf).unwrap();
        SignInVerifyArgs {
            csrf: csrf.into(),
            wallet: bs58::encode(key.verifying_key().to_bytes()).into_string(),
            signature: bs58::encode(key.sign(&signed.to_bytes()).to_bytes()).into_string(),
        }
    }

    #[test]
    fn verify_accepts_signature_over_configured_message() {
        let args = signed_args("tok", "tok");
        let response = verify(&args, &SignInConfig::default()).unwrap();
        assert!(response.verified);
        assert_eq!(response.wallet, args.wallet);
    }

    #[test]
    fn verify_fails_for_another_token() {
        let err = verify(&signed_args("tok", "stale"), &SignInConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("rejected"));
    }

    #[test]
    fn verify_names_a_bad_wallet_flag() {
        let mut args = signed_args("tok", "tok");
        args.wallet = "z".repeat(44);
        let err = verify(&args, &SignInConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid --wallet"));
    }
}
