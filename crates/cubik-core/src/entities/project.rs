use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::RoundMembership;
use crate::enums::VerifyStatus;
use crate::errors::CoreError;

/// A project listed on Cubik, with its round memberships in the order the
/// data service returned them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub verify_status: VerifyStatus,
    #[serde(default)]
    pub round_memberships: Vec<RoundMembership>,
}

impl Project {
    /// Validate every funding round the project belongs to.
    ///
    /// # Errors
    ///
    /// Returns the first `CoreError::Validation` raised by a round.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.id.trim().is_empty() {
            return Err(CoreError::Validation("project id is empty".into()));
        }
        for membership in &self.round_memberships {
            membership.funding_round.validate()?;
        }
        Ok(())
    }
}
