//! # cubik-dashboard
//!
//! Data behind the project dashboard: who contributed, and how much was
//! donated per day. Rendering is left to the front-end.

pub mod contributors;
pub mod funding;

pub use contributors::{ContributorPreview, unique_contributors};
pub use funding::{DailyTotal, daily_funding_series};
