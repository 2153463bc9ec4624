//! Site configuration, embedded from `site.toml` at build time.

use rezonance_tracker::{ConfigError, TrackerConfig};
use serde::Deserialize;
use std::str::FromStr;
use tracing::Level;

/// The configuration shipped with the bundle.
pub const SITE_TOML: &str = include_str!("../site.toml");

/// Root site configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `trace`, `debug`, `info`, `warn` or `error`
    pub log_level: String,
    pub tracker: TrackerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            tracker: TrackerConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.tracker.validate()?;
        Ok(config)
    }

    /// Unknown level names fall back to `info`.
    pub fn level(&self) -> Level {
        Level::from_str(self.log_level.trim()).unwrap_or(Level::INFO)
    }
}
