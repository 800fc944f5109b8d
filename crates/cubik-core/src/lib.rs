//! # cubik-core
//!
//! Core types shared across all Cubik crates.
//!
//! - Entity structs as exported by the Cubik data service (projects, round
//!   memberships, funding rounds, contributions)
//! - Verification, membership, and display status enums
//! - The tie-break policy used when a project sits in several rounds
//! - Wallet address and username parsing
//! - A clock abstraction so "now" is read once per decision
//! - Cross-cutting error types

pub mod clock;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::CoreError;
pub use identity::{Username, WalletAddress};
