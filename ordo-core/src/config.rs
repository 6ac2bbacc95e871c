//! Global ordo configuration.

use std::path::PathBuf;

use config::{Config, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_LOCALE, DEFAULT_RITE, DEFAULT_WARMUP_YEARS_AHEAD, DEFAULT_WARMUP_YEARS_BACK,
};
use crate::error::{OrdoError, OrdoResult};

fn default_rite() -> String {
    DEFAULT_RITE.to_string()
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_warmup_years_back() -> i32 {
    DEFAULT_WARMUP_YEARS_BACK
}

fn default_warmup_years_ahead() -> i32 {
    DEFAULT_WARMUP_YEARS_AHEAD
}

/// Configuration at ~/.config/ordo/config.toml
///
/// Every field is optional; a missing file yields the defaults.
#[derive(Debug, Deserialize, Clone)]
pub struct OrdoConfig {
    /// Cache base directory override (tilde-expanded).
    pub cache_dir: Option<PathBuf>,

    #[serde(default = "default_rite")]
    pub rite: String,

    #[serde(default = "default_locale")]
    pub locale: String,

    /// Years before the current one warmed up at server start.
    #[serde(default = "default_warmup_years_back")]
    pub warmup_years_back: i32,

    /// Years after the current one warmed up at server start.
    #[serde(default = "default_warmup_years_ahead")]
    pub warmup_years_ahead: i32,
}

impl Default for OrdoConfig {
    fn default() -> Self {
        OrdoConfig {
            cache_dir: None,
            rite: default_rite(),
            locale: default_locale(),
            warmup_years_back: default_warmup_years_back(),
            warmup_years_ahead: default_warmup_years_ahead(),
        }
    }
}

impl OrdoConfig {
    pub fn config_path() -> OrdoResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| OrdoError::Config("Could not determine config directory".into()))?
            .join("ordo");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the configuration, writing a commented template on first run.
    pub fn load() -> OrdoResult<OrdoConfig> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: OrdoConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| OrdoError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| OrdoError::Config(e.to_string()))?;

        Ok(config)
    }

    pub fn create_default_config(path: &std::path::Path) -> OrdoResult<()> {
        let contents = "\
# ordo configuration

# Cache base directory override:
# cache_dir = \"~/.cache/ordo\"

# Calendar parameters:
# rite = \"roman\"
# locale = \"la\"

# Warmup span around the current year:
# warmup_years_back = 1
# warmup_years_ahead = 1
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| OrdoError::Config(format!("Could not create config directory: {e}")))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| OrdoError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Resolved cache base directory: the configured override
    /// (tilde-expanded) or `<cache dir>/ordo`.
    pub fn cache_base_dir(&self) -> OrdoResult<PathBuf> {
        if let Some(dir) = &self.cache_dir {
            let expanded = shellexpand::tilde(&dir.to_string_lossy()).into_owned();
            return Ok(PathBuf::from(expanded));
        }

        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| OrdoError::Config("Could not determine cache directory".into()))?;

        Ok(cache_dir.join("ordo"))
    }

    /// Inclusive year span warmed up at startup, centered on `current`.
    pub fn warmup_span(&self, current: i32) -> std::ops::RangeInclusive<i32> {
        (current - self.warmup_years_back)..=(current + self.warmup_years_ahead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OrdoConfig::default();
        assert_eq!(config.rite, "roman");
        assert_eq!(config.locale, "la");
        assert_eq!(config.warmup_span(2025), 2024..=2026);
    }

    #[test]
    fn test_cache_dir_override_expands_tilde() {
        let config = OrdoConfig {
            cache_dir: Some(PathBuf::from("~/ordo-cache")),
            ..OrdoConfig::default()
        };
        let dir = config.cache_base_dir().unwrap();
        assert!(!dir.to_string_lossy().starts_with('~'));
        assert!(dir.ends_with("ordo-cache"));
    }
}
