//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed working directories and env vars.

use cubik_config::{ConfigError, CubikConfig};
use cubik_core::enums::TieBreak;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

const ADMIN: &str = "52atj3jAYAq33rdDi4usSNpAozFF1foPTuyw8vkD6mtQ";

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            &format!(
                r#"
[admin]
wallets = ["{ADMIN}"]

[status]
tie_break = "priority"

[sign_in]
statement = "Sign in to Cubik"

[dashboard]
chart_window_days = 30
contributor_preview = 5
"#
            ),
        )?;

        let config: CubikConfig = Figment::from(Serialized::defaults(CubikConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.admin.wallets, vec![ADMIN.to_string()]);
        assert_eq!(config.status.tie_break, TieBreak::Priority);
        assert_eq!(config.sign_in.statement, "Sign in to Cubik");
        assert_eq!(config.dashboard.chart_window_days, 30);
        assert_eq!(config.dashboard.contributor_preview, 5);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[dashboard]\nchart_window_days = 7\n")?;

        let config = CubikConfig::load_from_file(std::path::Path::new("config.toml"))
            .expect("config loads");

        assert_eq!(config.dashboard.chart_window_days, 7);
        assert_eq!(config.dashboard.contributor_preview, 3);
        assert_eq!(config.status.tie_break, TieBreak::LastInOrder);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".cubik")?;
        jail.create_file(".cubik/config.toml", "[status]\ntie_break = \"first_in_order\"\n")?;

        let config = CubikConfig::load().expect("config loads");
        assert_eq!(config.status.tie_break, TieBreak::FirstInOrder);
        Ok(())
    });
}

#[test]
fn invalid_admin_wallet_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[admin]\nwallets = [\"0xdeadbeef\"]\n")?;

        let result = CubikConfig::load_from_file(std::path::Path::new("config.toml"));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "admin.wallets[0]"
        ));
        Ok(())
    });
}

#[test]
fn unknown_tie_break_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[status]\ntie_break = \"random\"\n")?;

        let result = CubikConfig::load_from_file(std::path::Path::new("config.toml"));
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}
