//! Configuration module.
//!
//! Settings resolve through a precedence chain, lowest to highest:
//! built-in defaults, the TOML config file, `INNOVANT_*` environment
//! variables, CLI flags. Each layer only overrides what it sets.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    ConfigError, ConfigFile,
};

use std::path::PathBuf;

/// Fully resolved configuration, after the whole precedence chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Splash duration in milliseconds. Zero skips the splash.
    pub splash_ms: u64,
    /// Accent theme name ("orange", "blue", "teal").
    pub accent: String,
    /// Ticks a deferred production pends before settling.
    pub defer_ticks: u64,
    /// Path for tracing output. The TUI owns the terminal, so logs go
    /// to a file the user can `tail -f`.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            // The observed splash interval.
            splash_ms: 2000,
            accent: "orange".to_string(),
            defer_ticks: 3,
            log_file_path: default_log_path(),
        }
    }
}

/// Default log file location: the platform state directory, falling
/// back to the system temp directory.
fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("innovant")
        .join("innovant.log")
}

/// Default config file location: `<config dir>/innovant/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("innovant").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_observed_shell() {
        let config = ResolvedConfig::default();
        assert_eq!(config.splash_ms, 2000);
        assert_eq!(config.accent, "orange");
        assert_eq!(config.defer_ticks, 3);
    }

    #[test]
    fn default_log_path_ends_with_app_file() {
        let path = default_log_path();
        assert!(path.ends_with("innovant/innovant.log"));
    }
}
