//! # cubik-auth
//!
//! Admin authorization and wallet sign-in for Cubik.
//!
//! The admin allow-list is configuration, read through an
//! [`AuthorizationSource`]. Sign-in builds the message a wallet signs and
//! hands the signature to a [`SignatureVerifier`], normally the
//! [`Ed25519Verifier`].

pub mod admin;
pub mod error;
pub mod sign_in;

pub use admin::{AdminAccess, AllowList, AuthorizationSource, admin_access};
pub use error::AuthError;
pub use sign_in::{Ed25519Verifier, SignInMessage, SignatureVerifier, verify_sign_in};
