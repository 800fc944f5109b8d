//! Entity structs for Cubik domain objects.
//!
//! These mirror the records exported by the Cubik data service (camelCase
//! JSON, RFC 3339 instants). Nothing in this workspace creates or mutates
//! them; they are read, validated, and derived from.

mod contribution;
mod project;
mod round;

pub use contribution::{Contribution, Contributor};
pub use project::Project;
pub use round::{FundingRound, RoundMembership, RoundPhase};
