use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Public profile of the user behind a contribution.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

/// A single donation made within a funding round.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub id: String,
    /// Project receiving the donation. Rounds hold contributions for every
    /// participating project, so consumers filter on this.
    pub project_id: String,
    pub contributor: Contributor,
    /// Donated amount in USD at contribution time.
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}
