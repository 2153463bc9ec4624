//! # rezonance-tracker
//!
//! **Active-section tracking** for the ReZonance landing page - the small piece
//! of runtime state behind the fixed navigation bar and the cursor follower.
//!
//! The crate is DOM-free. Everything the tracker needs from the browser goes
//! through two seams:
//!
//! - [`Layout`] - live scroll offset and section geometry, queried on every
//!   scroll signal (never cached, because layout reflows).
//! - [`EventSource`] - pointer-move and scroll signals, delivered through
//!   scoped [`Subscription`]s that unsubscribe on drop.
//!
//! ## Quick Start
//!
//! ```rust
//! use rezonance_tracker::{ActiveSectionTracker, FixedLayout, SectionBounds, TrackerConfig};
//!
//! let sections = TrackerConfig::default().section_list().unwrap();
//! let mut tracker = ActiveSectionTracker::new(sections, 100.0);
//!
//! let layout = FixedLayout::new()
//!     .with_section("hero", SectionBounds::new(0.0, 800.0))
//!     .with_section("about", SectionBounds::new(800.0, 800.0));
//!
//! layout.set_scroll_offset(750.0);
//! tracker.on_scroll(&layout);
//! assert_eq!(tracker.active().as_str(), "about");
//! ```
//!
//! Developed by the HaVoltz web team (c)2025

pub mod config;
pub mod error;
pub mod events;
pub mod layout;
pub mod pointer;
pub mod section;
pub mod tracker;

pub use config::{DEFAULT_HOME_SECTION, DEFAULT_SCROLL_BIAS, TrackerConfig};
pub use error::ConfigError;
pub use events::{
    EventBus, EventHandler, EventKind, EventSource, Subscription, Subscriptions, TrackerEvent,
    TrackerUpdate, attach,
};
pub use layout::{FixedLayout, Layout, ScrollBehavior, ScrollRequest};
pub use pointer::{FOLLOWER_SIZE, FollowerPlacement, PointerPosition};
pub use section::{NavItem, SectionBounds, SectionId, SectionList};
pub use tracker::{ActiveSectionTracker, locate_section};
