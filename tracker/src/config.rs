//! Tracker configuration.
//!
//! The bias and section order are plain defaults that an optional TOML
//! document can override:
//!
//! ```toml
//! bias = 100.0
//! home = "hero"
//!
//! [[nav]]
//! id = "about"
//! label = "ABOUT"
//! ```

use crate::error::ConfigError;
use crate::section::{NavItem, SectionId, SectionList};
use crate::tracker::ActiveSectionTracker;
use serde::Deserialize;
use std::path::Path;

/// Lookahead added to the raw scroll offset before matching, compensating
/// for the fixed navigation bar covering the top of the viewport.
pub const DEFAULT_SCROLL_BIAS: f64 = 100.0;

/// Section that is active when the page loads.
pub const DEFAULT_HOME_SECTION: &str = "hero";

/// Navigation sections in display order: `(id, label)`.
pub(crate) const DEFAULT_NAV: &[(&str, &str)] = &[
    ("about", "ABOUT"),
    ("tracks", "TRACKS"),
    ("prize", "PRIZE"),
    ("timeline", "TIMELINE"),
    ("organisers", "ORGANISERS"),
    ("sponsors", "SPONSORS"),
    ("contact", "CONTACT US"),
];

/// Root tracker configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Pixels added to the scroll offset before matching
    pub bias: f64,
    /// Section active on page load; always matched first
    pub home: SectionId,
    /// Navigation sections in display and match order
    pub nav: Vec<NavItem>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            bias: DEFAULT_SCROLL_BIAS,
            home: SectionId::new(DEFAULT_HOME_SECTION),
            nav: DEFAULT_NAV
                .iter()
                .map(|(id, label)| NavItem::new(*id, *label))
                .collect(),
        }
    }
}

impl TrackerConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a specific path.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::try_load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}; using default sections", e);
                Self::default()
            }
        }
    }

    /// Load config from a path, surfacing read and validation errors.
    pub fn try_load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.bias.is_finite() {
            return Err(ConfigError::InvalidBias(self.bias));
        }
        self.section_list().map(|_| ())
    }

    /// The ordered section list: home first, then nav items.
    pub fn section_list(&self) -> Result<SectionList, ConfigError> {
        SectionList::new(self.home.clone(), self.nav.clone())
    }

    /// A fresh tracker for one page view.
    pub fn build_tracker(&self) -> Result<ActiveSectionTracker, ConfigError> {
        self.validate()?;
        Ok(ActiveSectionTracker::new(self.section_list()?, self.bias))
    }

    /// Like [`build_tracker`](Self::build_tracker), but an invalid config
    /// falls back to the default sections and bias.
    pub fn tracker_or_default(&self) -> ActiveSectionTracker {
        match self.build_tracker() {
            Ok(tracker) => tracker,
            Err(e) => {
                tracing::warn!("{}; using default sections", e);
                ActiveSectionTracker::new(SectionList::default(), DEFAULT_SCROLL_BIAS)
            }
        }
    }
}
