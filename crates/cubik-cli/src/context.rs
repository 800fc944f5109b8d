use chrono::{DateTime, Utc};
use cubik_config::CubikConfig;
use cubik_core::{Clock, FixedClock, SystemClock};

/// Shared state for command handlers.
pub struct AppContext {
    pub config: CubikConfig,
    clock: Box<dyn Clock>,
}

impl AppContext {
    /// Pin the clock to `at` when given, otherwise use the wall clock.
    #[must_use]
    pub fn new(config: CubikConfig, at: Option<DateTime<Utc>>) -> Self {
        let clock: Box<dyn Clock> = match at {
            Some(at) => Box::new(FixedClock(at)),
            None => Box::new(SystemClock),
        };
        Self { config, clock }
    }

    #[must_use]
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

/// Load configuration from an explicit file, or from the standard layers.
pub fn load_config(path: Option<&str>) -> anyhow::Result<CubikConfig> {
    let config = match path {
        Some(path) => {
            let path = std::path::Path::new(path);
            anyhow::ensure!(path.is_file(), "config file '{}' does not exist", path.display());
            let _ = dotenvy::dotenv();
            CubikConfig::load_from_file(path)?
        }
        None => CubikConfig::load_with_dotenv()?,
    };
    tracing::debug!(
        admins = config.admin.wallets.len(),
        tie_break = %config.status.tie_break,
        "configuration loaded"
    );
    Ok(config)
}
