//! # cubik-status
//!
//! Derives the single display status of a Cubik project from its
//! verification state and funding-round memberships, and maps that status to
//! banner text.
//!
//! Resolution is pure: it reads the entities and one instant, and holds no
//! state between calls.

pub mod banner;
pub mod resolver;

pub use banner::StatusBanner;
pub use resolver::{ResolvedStatus, StatusResolver, resolve_rounds, round_status};
