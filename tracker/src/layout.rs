//! Layout seam: where the tracker reads scroll offset and section geometry.
//!
//! Implementations must answer from *live* layout on every call. The tracker
//! never caches bounds, so a reflow between two scroll signals is picked up
//! by the second one.

use crate::section::{SectionBounds, SectionId};
use std::cell::{Cell, RefCell};

/// How the viewport should move when navigating to a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Animated, non-instant motion
    #[default]
    Smooth,
    /// Jump straight to the target
    Instant,
}

/// Rendered-page metrics and viewport control.
pub trait Layout {
    /// Current vertical scroll offset, or `None` when it cannot be read.
    fn scroll_offset(&self) -> Option<f64>;

    /// Live bounds of the rendered section with this id, `None` if absent.
    fn section_bounds(&self, id: &str) -> Option<SectionBounds>;

    /// Scroll so the section's top aligns with the viewport top.
    ///
    /// Returns `false` (and does nothing) when no such section is rendered.
    fn scroll_into_view(&self, id: &str, behavior: ScrollBehavior) -> bool;
}

impl<L: Layout + ?Sized> Layout for &L {
    fn scroll_offset(&self) -> Option<f64> {
        (**self).scroll_offset()
    }

    fn section_bounds(&self, id: &str) -> Option<SectionBounds> {
        (**self).section_bounds(id)
    }

    fn scroll_into_view(&self, id: &str, behavior: ScrollBehavior) -> bool {
        (**self).scroll_into_view(id, behavior)
    }
}

impl<L: Layout + ?Sized> Layout for std::rc::Rc<L> {
    fn scroll_offset(&self) -> Option<f64> {
        (**self).scroll_offset()
    }

    fn section_bounds(&self, id: &str) -> Option<SectionBounds> {
        (**self).section_bounds(id)
    }

    fn scroll_into_view(&self, id: &str, behavior: ScrollBehavior) -> bool {
        (**self).scroll_into_view(id, behavior)
    }
}

/// A navigation request recorded by [`FixedLayout`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    pub id: SectionId,
    pub behavior: ScrollBehavior,
}

/// In-memory layout for headless use and tests.
///
/// Sections can be added, moved, or removed between calls to simulate reflow.
/// Navigation jumps the scroll offset to the section top and records the
/// request.
#[derive(Debug, Default)]
pub struct FixedLayout {
    scroll_offset: Cell<Option<f64>>,
    sections: RefCell<Vec<(SectionId, SectionBounds)>>,
    requests: RefCell<Vec<ScrollRequest>>,
    bounds_queries: Cell<usize>,
}

impl FixedLayout {
    pub fn new() -> Self {
        Self {
            scroll_offset: Cell::new(Some(0.0)),
            ..Self::default()
        }
    }

    pub fn with_section(self, id: impl Into<SectionId>, bounds: SectionBounds) -> Self {
        self.set_section(id, bounds);
        self
    }

    /// Insert or move a section. Insertion order has no effect on matching.
    pub fn set_section(&self, id: impl Into<SectionId>, bounds: SectionBounds) {
        let id = id.into();
        let mut sections = self.sections.borrow_mut();
        match sections.iter_mut().find(|(known, _)| *known == id) {
            Some((_, existing)) => *existing = bounds,
            None => sections.push((id, bounds)),
        }
    }

    pub fn remove_section(&self, id: &str) {
        self.sections.borrow_mut().retain(|(known, _)| known != id);
    }

    pub fn set_scroll_offset(&self, offset: f64) {
        self.scroll_offset.set(Some(offset));
    }

    /// Simulate a viewport whose offset cannot be read.
    pub fn clear_scroll_offset(&self) {
        self.scroll_offset.set(None);
    }

    pub fn requests(&self) -> Vec<ScrollRequest> {
        self.requests.borrow().clone()
    }

    /// Number of `section_bounds` lookups served so far.
    pub fn bounds_queries(&self) -> usize {
        self.bounds_queries.get()
    }
}

impl Layout for FixedLayout {
    fn scroll_offset(&self) -> Option<f64> {
        self.scroll_offset.get()
    }

    fn section_bounds(&self, id: &str) -> Option<SectionBounds> {
        self.bounds_queries.set(self.bounds_queries.get() + 1);
        self.sections
            .borrow()
            .iter()
            .find(|(known, _)| known == id)
            .map(|(_, bounds)| *bounds)
    }

    fn scroll_into_view(&self, id: &str, behavior: ScrollBehavior) -> bool {
        let Some(bounds) = self.section_bounds(id) else {
            return false;
        };
        self.scroll_offset.set(Some(bounds.top));
        self.requests.borrow_mut().push(ScrollRequest {
            id: SectionId::new(id),
            behavior,
        });
        true
    }
}
