//! # cubik-config
//!
//! Layered configuration loading for Cubik using figment.
//!
//! Later layers override earlier ones:
//! 1. Environment variables (`CUBIK_*` prefix, `__` as separator)
//! 2. Project-level `.cubik/config.toml`
//! 3. User-level `~/.config/cubik/config.toml`
//! 4. Built-in defaults
//!
//! # Environment
//!
//! Figment maps `CUBIK_STATUS__TIE_BREAK` -> `status.tie_break`,
//! `CUBIK_ADMIN__WALLETS` -> `admin.wallets` (use `[a, b]` for lists), etc.
//!
//! # Usage
//!
//! ```no_run
//! use cubik_config::CubikConfig;
//!
//! let config = CubikConfig::load_with_dotenv().expect("config");
//!
//! if !config.admin.is_configured() {
//!     eprintln!("no admin wallets configured");
//! }
//! ```

mod admin;
mod dashboard;
mod error;
mod sign_in;
mod status;

pub use admin::AdminConfig;
pub use dashboard::DashboardConfig;
pub use error::ConfigError;
pub use sign_in::{DEFAULT_STATEMENT, SignInConfig};
pub use status::StatusConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CubikConfig {
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub status: StatusConfig,
    #[serde(default)]
    pub sign_in: SignInConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl CubikConfig {
    /// Merge every layer and validate the result. `.env` is left alone.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when a source fails to parse and
    /// `ConfigError::InvalidValue` when a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Read `.env` into the process environment first, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load from an explicit TOML file layered over defaults, with env on top.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let figment = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("CUBIK_").split("__"));
        Self::from_figment(figment)
    }

    /// Extract and validate a config from any figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults, then user file, then project file, then `CUBIK_*`.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(user_path) = Self::user_config_path().filter(|path| path.exists()) {
            figment = figment.merge(Toml::file(user_path));
        }

        let local_path = PathBuf::from(".cubik/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("CUBIK_").split("__"))
    }

    /// Check values that serde alone cannot.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.admin.wallet_addresses()?;

        if self.sign_in.statement.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "sign_in.statement".into(),
                reason: "must not be empty".into(),
            });
        }
        let max_window = DashboardConfig::MAX_CHART_WINDOW_DAYS;
        if !(1..=max_window).contains(&self.dashboard.chart_window_days) {
            return Err(ConfigError::InvalidValue {
                field: "dashboard.chart_window_days".into(),
                reason: format!("must be between 1 and {max_window}"),
            });
        }
        if self.dashboard.contributor_preview == 0 {
            return Err(ConfigError::InvalidValue {
                field: "dashboard.contributor_preview".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// `~/.config/cubik/config.toml` on Linux; `dirs` decides elsewhere.
    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cubik").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubik_core::enums::TieBreak;

    #[test]
    fn default_config_is_valid() {
        let config = CubikConfig::default();
        assert!(!config.admin.is_configured());
        assert_eq!(config.status.tie_break, TieBreak::LastInOrder);
        assert_eq!(config.sign_in.statement, DEFAULT_STATEMENT);
        config.validate().expect("defaults should validate");
    }

    #[test]
    fn zero_window_is_rejected() {
        let mut config = CubikConfig::default();
        config.dashboard.chart_window_days = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("dashboard.chart_window_days"));
    }

    #[test]
    fn window_is_capped_at_a_leap_year() {
        let mut config = CubikConfig::default();
        config.dashboard.chart_window_days = DashboardConfig::MAX_CHART_WINDOW_DAYS;
        config.validate().expect("a 366-day window is allowed");

        config.dashboard.chart_window_days = DashboardConfig::MAX_CHART_WINDOW_DAYS + 1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("between 1 and 366"));
    }

    #[test]
    fn blank_statement_is_rejected() {
        let mut config = CubikConfig::default();
        config.sign_in.statement = "   ".into();
        assert!(config.validate().is_err());
    }
}
