//! Status resolution configuration.

use cubik_core::enums::TieBreak;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StatusConfig {
    /// Which round wins when a verified project sits in several rounds.
    #[serde(default)]
    pub tie_break: TieBreak,
}
