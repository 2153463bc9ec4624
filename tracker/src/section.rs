//! Section model: ids, nav items, live bounds and the ordered section list.

use crate::config::{DEFAULT_HOME_SECTION, DEFAULT_NAV};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Stable identifier of one page region (the DOM `id` of its `<section>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A navigation-bar entry: the section it targets and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: SectionId,
    pub label: String,
}

impl NavItem {
    pub fn new(id: impl Into<SectionId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Vertical extent of a rendered section, read from live layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    /// Distance from document top to the section's start
    pub top: f64,
    /// Vertical extent of the section
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open containment: `position ∈ [top, top + height)`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.bottom()
    }
}

/// Ordered, validated list of known sections.
///
/// The home section (`hero`) always comes first, followed by the nav items in
/// their declared order. Order only matters as the tie-break when two ranges
/// overlap: the earlier section wins.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionList {
    home: SectionId,
    nav: Vec<NavItem>,
}

impl SectionList {
    /// Build a list, rejecting empty or duplicate ids.
    pub fn new(home: impl Into<SectionId>, nav: Vec<NavItem>) -> Result<Self, ConfigError> {
        let home = home.into();
        let mut seen = HashSet::new();

        let ids = std::iter::once(&home).chain(nav.iter().map(|item| &item.id));
        for (position, id) in ids.enumerate() {
            if id.as_str().trim().is_empty() {
                return Err(ConfigError::EmptySectionId { position });
            }
            if !seen.insert(id.as_str()) {
                return Err(ConfigError::DuplicateSection {
                    id: id.as_str().to_string(),
                });
            }
        }

        Ok(Self { home, nav })
    }

    pub fn home(&self) -> &SectionId {
        &self.home
    }

    pub fn nav_items(&self) -> &[NavItem] {
        &self.nav
    }

    /// All section ids in declaration order, home first.
    pub fn iter(&self) -> impl Iterator<Item = &SectionId> {
        std::iter::once(&self.home).chain(self.nav.iter().map(|item| &item.id))
    }

    pub fn len(&self) -> usize {
        self.nav.len() + 1
    }

    /// Always false: the home section is mandatory.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.iter().position(|known| known == id)
    }

    pub fn id_at(&self, index: usize) -> Option<&SectionId> {
        match index {
            0 => Some(&self.home),
            n => self.nav.get(n - 1).map(|item| &item.id),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }
}

impl Default for SectionList {
    /// `hero` followed by the seven landing-page nav sections.
    fn default() -> Self {
        Self {
            home: SectionId::new(DEFAULT_HOME_SECTION),
            nav: DEFAULT_NAV
                .iter()
                .map(|(id, label)| NavItem::new(*id, *label))
                .collect(),
        }
    }
}
