//! Configuration file loading with precedence handling.

use crate::config::{default_config_path, ResolvedConfig};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permissions, IO).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, lower-precedence values
/// apply. Corresponds to `~/.config/innovant/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Splash duration in milliseconds.
    #[serde(default)]
    pub splash_ms: Option<u64>,

    /// Accent theme name.
    #[serde(default)]
    pub accent: Option<String>,

    /// Deferred-production settle delay in ticks.
    #[serde(default)]
    pub defer_ticks: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Load the config file: an explicit `--config` path must exist and
/// parse; the default location is optional - missing means "no file",
/// anything else surfaces as an error rather than being ignored.
pub fn load_config_with_precedence(
    explicit: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    let (path, required) = match explicit {
        Some(path) => (Some(path), true),
        None => (default_config_path(), false),
    };
    let Some(path) = path else {
        return Ok(None);
    };
    if !required && !path.exists() {
        return Ok(None);
    }

    let raw = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    let parsed = toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
        path,
        reason: e.to_string(),
    })?;
    Ok(Some(parsed))
}

/// Merge the config file over the built-in defaults.
pub fn merge_config(file: Option<ConfigFile>) -> ResolvedConfig {
    let mut config = ResolvedConfig::default();
    let Some(file) = file else {
        return config;
    };
    if let Some(splash_ms) = file.splash_ms {
        config.splash_ms = splash_ms;
    }
    if let Some(accent) = file.accent {
        config.accent = accent;
    }
    if let Some(defer_ticks) = file.defer_ticks {
        config.defer_ticks = defer_ticks;
    }
    if let Some(log_file_path) = file.log_file_path {
        config.log_file_path = log_file_path;
    }
    config
}

/// Apply `INNOVANT_*` environment variable overrides.
///
/// Unparseable numeric values are ignored rather than fatal - a broken
/// env var should not stop the application from starting.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var("INNOVANT_SPLASH_MS") {
        if let Ok(ms) = raw.parse() {
            config.splash_ms = ms;
        }
    }
    if let Ok(accent) = std::env::var("INNOVANT_ACCENT") {
        config.accent = accent;
    }
    if let Ok(raw) = std::env::var("INNOVANT_DEFER_TICKS") {
        if let Ok(ticks) = raw.parse() {
            config.defer_ticks = ticks;
        }
    }
    if let Ok(path) = std::env::var("INNOVANT_LOG_FILE") {
        config.log_file_path = PathBuf::from(path);
    }
    config
}

/// Apply CLI argument overrides, the highest-precedence layer.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    no_splash: bool,
    accent: Option<String>,
) -> ResolvedConfig {
    if no_splash {
        config.splash_ms = 0;
    }
    if let Some(accent) = accent {
        config.accent = accent;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_with_no_file_yields_defaults() {
        assert_eq!(merge_config(None), ResolvedConfig::default());
    }

    #[test]
    fn file_values_override_defaults_field_by_field() {
        let file = ConfigFile {
            splash_ms: Some(500),
            accent: None,
            defer_ticks: Some(0),
            log_file_path: None,
        };
        let merged = merge_config(Some(file));
        assert_eq!(merged.splash_ms, 500);
        assert_eq!(merged.defer_ticks, 0);
        // Unset fields keep their defaults.
        assert_eq!(merged.accent, "orange");
    }

    #[test]
    fn cli_overrides_win_over_file_values() {
        let file = ConfigFile {
            splash_ms: Some(500),
            accent: Some("teal".to_string()),
            defer_ticks: None,
            log_file_path: None,
        };
        let merged = merge_config(Some(file));
        let resolved = apply_cli_overrides(merged, true, Some("blue".to_string()));
        assert_eq!(resolved.splash_ms, 0, "--no-splash zeroes the splash");
        assert_eq!(resolved.accent, "blue");
    }

    #[test]
    fn config_file_parses_from_toml() {
        let file: ConfigFile = toml::from_str(
            r#"
            splash_ms = 1200
            accent = "blue"
            "#,
        )
        .expect("valid toml");
        assert_eq!(file.splash_ms, Some(1200));
        assert_eq!(file.accent.as_deref(), Some("blue"));
        assert_eq!(file.defer_ticks, None);
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        let result: Result<ConfigFile, _> = toml::from_str("surprise = true");
        assert!(result.is_err(), "deny_unknown_fields catches typos");
    }

    #[test]
    fn explicit_missing_config_path_is_an_error() {
        let result = load_config_with_precedence(Some(PathBuf::from(
            "/definitely/not/a/real/config.toml",
        )));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }
}
