//! The active-section tracker.
//!
//! Owns the page-view state (active section, pointer position) and recomputes
//! it from pointer-move and scroll signals.

use crate::layout::{Layout, ScrollBehavior};
use crate::pointer::PointerPosition;
use crate::section::{NavItem, SectionId, SectionList};

/// First section in declared order whose live bounds contain `position`.
///
/// Bounds are queried from `layout` on every call. Sections that are not
/// rendered simply do not match.
pub fn locate_section<L: Layout + ?Sized>(
    sections: &SectionList,
    position: f64,
    layout: &L,
) -> Option<usize> {
    sections.iter().position(|id| {
        layout
            .section_bounds(id.as_str())
            .is_some_and(|bounds| bounds.contains(position))
    })
}

/// Scroll- and pointer-driven UI state for one page view.
#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    sections: SectionList,
    bias: f64,
    // Index into `sections`; an unknown id is unrepresentable.
    active: usize,
    pointer: PointerPosition,
}

impl ActiveSectionTracker {
    /// Start on the home section with no pointer observed.
    pub fn new(sections: SectionList, bias: f64) -> Self {
        Self {
            sections,
            bias,
            active: 0,
            pointer: PointerPosition::default(),
        }
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn active(&self) -> &SectionId {
        // `active` only ever holds indices produced from `sections`
        self.sections
            .id_at(self.active)
            .unwrap_or_else(|| self.sections.home())
    }

    /// The nav item for the active section, `None` while on the home section.
    pub fn active_nav_item(&self) -> Option<&NavItem> {
        self.active
            .checked_sub(1)
            .and_then(|index| self.sections.nav_items().get(index))
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == id
    }

    pub fn pointer(&self) -> PointerPosition {
        self.pointer
    }

    /// Record the pointer coordinates as-is. Returns whether they changed.
    pub fn on_pointer_move(&mut self, x: i32, y: i32) -> bool {
        let next = PointerPosition::new(x, y);
        let changed = next != self.pointer;
        self.pointer = next;
        changed
    }

    /// Re-evaluate the active section from the live layout.
    ///
    /// The scroll offset is biased forward so a section counts as active
    /// slightly before it reaches the top of the viewport. When no section
    /// matches, the previous value is kept. Returns whether the active
    /// section changed.
    pub fn on_scroll<L: Layout + ?Sized>(&mut self, layout: &L) -> bool {
        let Some(offset) = layout.scroll_offset() else {
            tracing::trace!("scroll offset unavailable, keeping {}", self.active());
            return false;
        };
        let position = offset + self.bias;

        match locate_section(&self.sections, position, layout) {
            Some(index) if index != self.active => {
                self.active = index;
                tracing::debug!("active section -> {} (at {})", self.active(), position);
                true
            }
            Some(_) => false,
            None => {
                tracing::trace!("no section at {}, keeping {}", position, self.active());
                false
            }
        }
    }

    /// Smoothly bring the section's top to the viewport top.
    ///
    /// Missing sections are a silent no-op. Tracker state is not touched; the
    /// scroll signals produced by the motion update it as usual.
    pub fn scroll_to_section<L: Layout + ?Sized>(&self, id: &str, layout: &L) {
        if layout.scroll_into_view(id, ScrollBehavior::Smooth) {
            tracing::debug!("navigating to section {}", id);
        } else {
            tracing::trace!("no rendered section {}, ignoring navigation", id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FixedLayout;
    use crate::section::SectionBounds;
    use pretty_assertions::assert_eq;

    fn sections() -> SectionList {
        SectionList::new(
            "hero",
            vec![
                NavItem::new("about", "ABOUT"),
                NavItem::new("tracks", "TRACKS"),
                NavItem::new("prize", "PRIZE"),
            ],
        )
        .expect("valid sections")
    }

    fn layout() -> FixedLayout {
        FixedLayout::new()
            .with_section("hero", SectionBounds::new(0.0, 800.0))
            .with_section("about", SectionBounds::new(800.0, 800.0))
            .with_section("tracks", SectionBounds::new(1600.0, 800.0))
    }

    #[test]
    fn test_starts_on_home_section() {
        let tracker = ActiveSectionTracker::new(sections(), 100.0);
        assert_eq!(tracker.active().as_str(), "hero");
        assert!(tracker.active_nav_item().is_none());
        assert_eq!(tracker.pointer(), PointerPosition::default());
    }

    #[test]
    fn test_bias_pulls_next_section_in_early() {
        let mut tracker = ActiveSectionTracker::new(sections(), 100.0);
        let layout = layout();

        layout.set_scroll_offset(750.0);
        assert!(tracker.on_scroll(&layout));
        assert_eq!(tracker.active().as_str(), "about");
        assert_eq!(
            tracker.active_nav_item().map(|item| item.label.as_str()),
            Some("ABOUT")
        );

        layout.set_scroll_offset(0.0);
        assert!(tracker.on_scroll(&layout));
        assert_eq!(tracker.active().as_str(), "hero");
    }

    #[test]
    fn test_section_boundaries_after_bias() {
        let mut tracker = ActiveSectionTracker::new(sections(), 100.0);
        let layout = layout();

        // 699 + 100 = 799, still inside hero
        layout.set_scroll_offset(699.0);
        tracker.on_scroll(&layout);
        assert_eq!(tracker.active().as_str(), "hero");

        // 700 + 100 = 800, first pixel of about
        layout.set_scroll_offset(700.0);
        tracker.on_scroll(&layout);
        assert_eq!(tracker.active().as_str(), "about");
    }

    #[test]
    fn test_every_offset_inside_a_range_selects_it() {
        let mut tracker = ActiveSectionTracker::new(sections(), 100.0);
        let layout = layout();

        for offset in (1500..2300).step_by(37) {
            layout.set_scroll_offset(offset as f64);
            tracker.on_scroll(&layout);
            assert_eq!(tracker.active().as_str(), "tracks", "offset {offset}");
        }
    }

    #[test]
    fn test_miss_keeps_previous_section() {
        let mut tracker = ActiveSectionTracker::new(sections(), 100.0);
        let layout = layout();

        layout.set_scroll_offset(1700.0);
        tracker.on_scroll(&layout);
        assert_eq!(tracker.active().as_str(), "tracks");

        // past the end of the last rendered section
        layout.set_scroll_offset(5000.0);
        assert!(!tracker.on_scroll(&layout));
        assert_eq!(tracker.active().as_str(), "tracks");

        // above the first section by more than the bias
        layout.set_scroll_offset(-250.0);
        assert!(!tracker.on_scroll(&layout));
        assert_eq!(tracker.active().as_str(), "tracks");
    }

    #[test]
    fn test_unreadable_offset_keeps_previous_section() {
        let mut tracker = ActiveSectionTracker::new(sections(), 100.0);
        let layout = layout();
        layout.set_scroll_offset(900.0);
        tracker.on_scroll(&layout);

        layout.clear_scroll_offset();
        assert!(!tracker.on_scroll(&layout));
        assert_eq!(tracker.active().as_str(), "about");
    }

    #[test]
    fn test_earlier_section_wins_on_overlap() {
        let mut tracker = ActiveSectionTracker::new(sections(), 100.0);
        let layout = FixedLayout::new()
            .with_section("tracks", SectionBounds::new(1000.0, 1000.0))
            .with_section("about", SectionBounds::new(800.0, 800.0));

        layout.set_scroll_offset(1100.0);
        tracker.on_scroll(&layout);
        assert_eq!(tracker.active().as_str(), "about");
    }

    #[test]
    fn test_repeated_scroll_is_idempotent() {
        let mut tracker = ActiveSectionTracker::new(sections(), 100.0);
        let layout = layout();
        layout.set_scroll_offset(1234.0);

        assert!(tracker.on_scroll(&layout));
        let first = tracker.active().clone();
        assert!(!tracker.on_scroll(&layout));
        assert_eq!(tracker.active(), &first);
    }

    #[test]
    fn test_bounds_are_requeried_every_scroll() {
        let mut tracker = ActiveSectionTracker::new(sections(), 100.0);
        let layout = layout();
        layout.set_scroll_offset(900.0);

        tracker.on_scroll(&layout);
        let after_first = layout.bounds_queries();
        tracker.on_scroll(&layout);
        assert!(layout.bounds_queries() > after_first);

        // reflow: about grows, tracks moves down
        layout.set_section("about", SectionBounds::new(800.0, 1200.0));
        layout.set_section("tracks", SectionBounds::new(2000.0, 800.0));
        layout.set_scroll_offset(1700.0);
        tracker.on_scroll(&layout);
        assert_eq!(tracker.active().as_str(), "about");
    }

    #[test]
    fn test_unrendered_section_is_skipped() {
        let mut tracker = ActiveSectionTracker::new(sections(), 100.0);
        let layout = layout();
        layout.remove_section("about");

        layout.set_scroll_offset(900.0);
        assert!(!tracker.on_scroll(&layout));
        assert_eq!(tracker.active().as_str(), "hero");
    }

    #[test]
    fn test_unknown_rendered_sections_are_ignored() {
        let mut tracker = ActiveSectionTracker::new(sections(), 100.0);
        let layout = FixedLayout::new().with_section("marquee", SectionBounds::new(0.0, 5000.0));

        layout.set_scroll_offset(300.0);
        assert!(!tracker.on_scroll(&layout));
        assert_eq!(tracker.active().as_str(), "hero");
    }

    #[test]
    fn test_pointer_last_write_wins() {
        let mut tracker = ActiveSectionTracker::new(sections(), 100.0);
        assert!(tracker.on_pointer_move(10, 20));
        assert!(tracker.on_pointer_move(-40, 99999));
        assert_eq!(tracker.pointer(), PointerPosition::new(-40, 99999));
        assert!(!tracker.on_pointer_move(-40, 99999));
    }

    #[test]
    fn test_scroll_to_missing_section_changes_nothing() {
        let tracker = ActiveSectionTracker::new(sections(), 100.0);
        let layout = layout();
        layout.set_scroll_offset(10.0);

        tracker.scroll_to_section("prize", &layout);

        assert_eq!(tracker.active().as_str(), "hero");
        assert_eq!(layout.scroll_offset(), Some(10.0));
        assert!(layout.requests().is_empty());
    }

    #[test]
    fn test_scroll_to_section_is_smooth() {
        let tracker = ActiveSectionTracker::new(sections(), 100.0);
        let layout = layout();

        tracker.scroll_to_section("tracks", &layout);

        let requests = layout.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].id.as_str(), "tracks");
        assert_eq!(requests[0].behavior, ScrollBehavior::Smooth);
        assert_eq!(layout.scroll_offset(), Some(1600.0));
        // navigation alone does not move the highlight
        assert_eq!(tracker.active().as_str(), "hero");
    }

    #[test]
    fn test_locate_section_reports_first_match() {
        let layout = layout();
        assert_eq!(locate_section(&sections(), 850.0, &layout), Some(1));
        assert_eq!(locate_section(&sections(), 2400.0, &layout), None);
    }
}
