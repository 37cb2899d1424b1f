//! Application settings loaded from `salon.toml`.
//!
//! Every section and key is optional; a missing file yields the defaults. The
//! backend URL and token can be overridden from the environment so secrets stay
//! out of the config file.

use crate::errors::{Error, Result};
use chrono_tz::Tz;
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire salon.toml file
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Backend connection
    pub api: ApiSettings,
    /// How results are shown to the operator
    pub display: DisplaySettings,
    /// Local snapshot behaviour
    pub snapshot: SnapshotSettings,
}

/// `[api]` section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiSettings {
    /// Backend root, e.g. `http://127.0.0.1:8000`
    pub base_url: String,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// Bearer token sent with every request, if set
    pub token: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: 30,
            token: None,
        }
    }
}

/// `[display]` section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplaySettings {
    /// IANA timezone of the salon; decides what "today" is
    pub timezone: String,
    /// Prefix for monetary amounts
    pub currency_symbol: String,
    /// Maximum rows in a listing
    pub max_listed: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
            currency_symbol: "₹".to_string(),
            max_listed: 25,
        }
    }
}

impl DisplaySettings {
    /// Parses the configured timezone.
    ///
    /// # Errors
    /// Returns [`Error::Config`] for names that are not IANA timezones.
    pub fn tz(&self) -> Result<Tz> {
        self.timezone.parse::<Tz>().map_err(|e| Error::Config {
            message: format!("Unknown timezone '{}': {e}", self.timezone),
        })
    }
}

/// `[snapshot]` section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SnapshotSettings {
    /// How long a stored business snapshot is served before refetching
    pub max_age_secs: u64,
}

impl Default for SnapshotSettings {
    fn default() -> Self {
        Self { max_age_secs: 300 }
    }
}

impl SnapshotSettings {
    /// [`Self::max_age_secs`] as a duration.
    #[must_use]
    pub fn max_age(&self) -> chrono::Duration {
        let secs = u32::try_from(self.max_age_secs).unwrap_or(u32::MAX);
        chrono::Duration::seconds(i64::from(secs))
    }
}

/// Parses settings from TOML text.
///
/// # Errors
/// Returns [`Error::Config`] if the TOML is malformed or a value has the wrong type.
pub fn parse_settings(contents: &str) -> Result<Settings> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse salon.toml: {e}"),
    })
}

/// Loads settings from a TOML file, falling back to defaults when it does not exist.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path_ref = path.as_ref();
    if !path_ref.exists() {
        tracing::info!("No settings file at {:?}, using defaults", path_ref);
        return Ok(Settings::default());
    }
    tracing::debug!("Loading settings from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;
    parse_settings(&contents)
}

/// Applies `SALON_API_URL` and `SALON_API_TOKEN` overrides.
pub fn apply_env_overrides<F>(settings: &mut Settings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("SALON_API_URL").filter(|v| !v.trim().is_empty()) {
        settings.api.base_url = url;
    }
    if let Some(token) = lookup("SALON_API_TOKEN").filter(|v| !v.trim().is_empty()) {
        settings.api.token = Some(token);
    }
}

/// Loads settings from `SALON_CONFIG` (default `./salon.toml`) and applies
/// environment overrides, then checks the timezone.
///
/// # Errors
/// Returns an error if the file is unreadable or malformed, or the timezone is unknown.
pub fn load_app_settings() -> Result<Settings> {
    let path = std::env::var("SALON_CONFIG").unwrap_or_else(|_| "salon.toml".to_string());
    let mut settings = load_settings(&path)?;
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    settings.display.tz()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_full_settings() {
        let toml_str = r#"
            [api]
            base_url = "https://salon.example.com"
            timeout_secs = 10

            [display]
            timezone = "Asia/Kolkata"
            currency_symbol = "Rs."
            max_listed = 10

            [snapshot]
            max_age_secs = 60
        "#;

        let settings = parse_settings(toml_str).unwrap();
        assert_eq!(settings.api.base_url, "https://salon.example.com");
        assert_eq!(settings.api.timeout_secs, 10);
        assert_eq!(settings.display.currency_symbol, "Rs.");
        assert_eq!(settings.display.max_listed, 10);
        assert_eq!(settings.snapshot.max_age_secs, 60);
        assert_eq!(settings.snapshot.max_age(), chrono::Duration::minutes(1));
        assert_eq!(settings.display.tz().unwrap(), chrono_tz::Asia::Kolkata);
    }

    #[test]
    fn test_example_file_parses() {
        let settings = parse_settings(include_str!("../../salon.example.toml")).unwrap();
        assert_eq!(settings.display.tz().unwrap(), chrono_tz::Asia::Kolkata);
        assert_eq!(settings.api.token, None);
    }

    #[test]
    fn test_partial_settings_keep_defaults() {
        let settings = parse_settings("[display]\ntimezone = \"Europe/London\"\n").unwrap();
        assert_eq!(settings.api, ApiSettings::default());
        assert_eq!(settings.display.currency_symbol, "₹");
        assert_eq!(settings.snapshot.max_age_secs, 300);
    }

    #[test]
    fn test_bad_values_are_config_errors() {
        assert!(matches!(
            parse_settings("[api]\ntimeout_secs = \"soon\"\n"),
            Err(Error::Config { .. })
        ));

        let display = DisplaySettings {
            timezone: "Mars/Olympus".to_string(),
            ..DisplaySettings::default()
        };
        assert!(matches!(display.tz(), Err(Error::Config { .. })));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let settings = load_settings("definitely/not/here/salon.toml").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("SALON_API_URL", "http://backend:9000"),
            ("SALON_API_TOKEN", "secret"),
        ]
        .into_iter()
        .collect();
        let mut settings = Settings::default();
        apply_env_overrides(&mut settings, |key| env.get(key).map(ToString::to_string));
        assert_eq!(settings.api.base_url, "http://backend:9000");
        assert_eq!(settings.api.token.as_deref(), Some("secret"));
    }
}
