//! Admin dashboard configuration.

use serde::{Deserialize, Serialize};

/// Days before today shown on the funding chart.
const fn default_chart_window_days() -> u32 {
    15
}

/// Avatars shown before the "+N" overflow label.
const fn default_contributor_preview() -> usize {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    #[serde(default = "default_chart_window_days")]
    pub chart_window_days: u32,

    #[serde(default = "default_contributor_preview")]
    pub contributor_preview: usize,
}

impl DashboardConfig {
    /// Longest chart window accepted from config or `--days`.
    pub const MAX_CHART_WINDOW_DAYS: u32 = 366;
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            chart_window_days: default_chart_window_days(),
            contributor_preview: default_contributor_preview(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = DashboardConfig::default();
        assert_eq!(config.chart_window_days, 15);
        assert_eq!(config.contributor_preview, 3);
    }
}
