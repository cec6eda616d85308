//! Global settings loaded from TOML, following the same OnceLock pattern as the table catalog.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
///
/// Fails with `AlreadyInitialized` once the singleton has been read, since
/// the custom values could no longer take effect.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    if INSTANCE.get().is_some() {
        return Err(SettingsError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub numeric: NumericSettings,
    pub matcher: MatcherSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NumericSettings {
    /// Thousands separator used by decimal normalization and currency formatting.
    pub separator: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatcherSettings {
    pub size_limit: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.numeric.separator.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "numeric.separator".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    // A digit separator would be re-grouped by a second normalization pass.
    if s.numeric.separator.chars().any(|c| c.is_ascii_digit()) {
        return Err(SettingsError::InvalidValue {
            field: "numeric.separator".to_string(),
            reason: "must not contain digits".to_string(),
        });
    }
    if s.matcher.size_limit == 0 {
        return Err(SettingsError::InvalidValue {
            field: "matcher.size_limit".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    Ok(())
}
