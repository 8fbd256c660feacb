//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`RESTAURANTOS_*`)
//! 2. Config file (`config.toml` in the platform config dir, or the path in
//!    `RESTAURANTOS_CONFIG`)
//! 3. Defaults (this file)
//!
//! ## Example `config.toml`
//! ```toml
//! store_name = "Harbor Grill"
//! currency_symbol = "$"
//! notification_duration_ms = 3000
//! support_email = "help@harborgrill.example"
//! support_phone = "+1 (555) 010-2000"
//! toaster_position = "bottom-right"
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::{Path, PathBuf};

use restaurantos_core::registry::{DEFAULT_SUPPORT_EMAIL, DEFAULT_SUPPORT_PHONE};
use restaurantos_core::{
    validation, HelpPage, Money, ShellOptions, ToasterPosition, ValidationError,
    DEFAULT_NOTIFICATION_DURATION_MS,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "RESTAURANTOS_CONFIG";

/// Shortest toast the shell will show.
const MIN_NOTIFICATION_MS: u32 = 500;

/// Longest toast the shell will show.
const MAX_NOTIFICATION_MS: u32 = 60_000;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Store name (window title, receipts)
    #[serde(alias = "store_name")]
    pub store_name: String,

    /// Currency symbol (for display)
    #[serde(alias = "currency_symbol")]
    pub currency_symbol: String,

    /// How long toasts stay on screen
    #[serde(alias = "notification_duration_ms")]
    pub notification_duration_ms: u32,

    /// Shown on the help page
    #[serde(alias = "support_email")]
    pub support_email: String,

    /// Shown on the help page
    #[serde(alias = "support_phone")]
    pub support_phone: String,

    /// Where toasts stack
    #[serde(alias = "toaster_position")]
    pub toaster_position: ToasterPosition,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            store_name: "RestaurantOS".to_string(),
            currency_symbol: "$".to_string(),
            notification_duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
            support_email: DEFAULT_SUPPORT_EMAIL.to_string(),
            support_phone: DEFAULT_SUPPORT_PHONE.to_string(),
            toaster_position: ToasterPosition::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_required("store_name", &self.store_name)?;
        validation::validate_required("currency_symbol", &self.currency_symbol)?;
        validation::validate_required("support_email", &self.support_email)?;
        validation::validate_required("support_phone", &self.support_phone)?;

        if !self.support_email.contains('@') {
            return Err(ValidationError::InvalidFormat {
                field: "support_email".to_string(),
                reason: "must contain '@'".to_string(),
            });
        }

        if !(MIN_NOTIFICATION_MS..=MAX_NOTIFICATION_MS).contains(&self.notification_duration_ms) {
            return Err(ValidationError::OutOfRange {
                field: "notification_duration_ms".to_string(),
                min: MIN_NOTIFICATION_MS as i64,
                max: MAX_NOTIFICATION_MS as i64,
            });
        }

        Ok(())
    }

    /// Applies `RESTAURANTOS_*` overrides read through `lookup`.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("RESTAURANTOS_STORE_NAME") {
            debug!(store_name = %name, "Overriding store name from environment");
            self.store_name = name;
        }

        if let Some(symbol) = lookup("RESTAURANTOS_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(ms) = lookup("RESTAURANTOS_NOTIFICATION_DURATION_MS") {
            match ms.parse::<u32>() {
                Ok(ms) => self.notification_duration_ms = ms,
                Err(_) => warn!(value = %ms, "Ignoring non-numeric notification duration"),
            }
        }

        if let Some(email) = lookup("RESTAURANTOS_SUPPORT_EMAIL") {
            self.support_email = email;
        }

        if let Some(phone) = lookup("RESTAURANTOS_SUPPORT_PHONE") {
            self.support_phone = phone;
        }

        if let Some(position) = lookup("RESTAURANTOS_TOASTER_POSITION") {
            // Same spelling as the config file ("top-right", ...).
            match serde_json::from_value(serde_json::Value::String(position.clone())) {
                Ok(parsed) => self.toaster_position = parsed,
                Err(_) => warn!(value = %position, "Unknown toaster position in environment"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        directories::ProjectDirs::from("com", "restaurantos", "desktop")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Shell construction options derived from this config.
    pub fn shell_options(&self) -> ShellOptions {
        ShellOptions {
            help: HelpPage::new(&self.support_email, &self.support_phone),
            notification_duration_ms: self.notification_duration_ms,
            toaster_position: self.toaster_position,
        }
    }

    /// Formats a cent amount with the configured currency symbol.
    pub fn format_currency(&self, cents: i64) -> String {
        Money::from_cents(cents).format_with(&self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.notification_duration_ms, 4000);
        assert_eq!(config.toaster_position, ToasterPosition::TopRight);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            store_name = "Harbor Grill"
            toaster_position = "bottom-left"
            "#,
        )
        .unwrap();

        assert_eq!(config.store_name, "Harbor Grill");
        assert_eq!(config.toaster_position, ToasterPosition::BottomLeft);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.support_email, DEFAULT_SUPPORT_EMAIL);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = AppConfig::from_toml_str("store_name = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = AppConfig::from_toml_str(r#"store_name = "From File""#).unwrap();
        config.apply_overrides(env(&[
            ("RESTAURANTOS_STORE_NAME", "From Env"),
            ("RESTAURANTOS_NOTIFICATION_DURATION_MS", "2500"),
            ("RESTAURANTOS_TOASTER_POSITION", "top-center"),
        ]));

        assert_eq!(config.store_name, "From Env");
        assert_eq!(config.notification_duration_ms, 2500);
        assert_eq!(config.toaster_position, ToasterPosition::TopCenter);
    }

    #[test]
    fn test_bad_env_values_are_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(env(&[
            ("RESTAURANTOS_NOTIFICATION_DURATION_MS", "soon"),
            ("RESTAURANTOS_TOASTER_POSITION", "middle"),
        ]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = AppConfig {
            notification_duration_ms: 10,
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::OutOfRange { .. })
        ));

        let config = AppConfig {
            support_email: "nobody".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidFormat { .. })
        ));

        let config = AppConfig {
            store_name: "  ".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_shell_options_carry_contacts() {
        let config = AppConfig {
            support_phone: "555-0142".to_string(),
            notification_duration_ms: 1500,
            ..AppConfig::default()
        };
        let options = config.shell_options();
        assert_eq!(options.notification_duration_ms, 1500);
        assert_eq!(options.help.channels[3].description, "Call us at 555-0142");
    }

    #[test]
    fn test_format_currency() {
        let config = AppConfig::default();
        assert_eq!(config.format_currency(1234), "$12.34");
        assert_eq!(config.format_currency(0), "$0.00");
        assert_eq!(config.format_currency(-1234), "-$12.34");

        let euro = AppConfig {
            currency_symbol: "€".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(euro.format_currency(995), "€9.95");
    }
}
