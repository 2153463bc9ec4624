//! Page-view tracker wiring.
//!
//! `TrackerProvider` owns the tracker for as long as it is mounted: it
//! subscribes to window events on mount, mirrors tracker updates into signals,
//! and drops the subscriptions in `on_cleanup`.

use crate::dom::{DomLayout, WindowEvents};
use leptos::prelude::*;
use rezonance_tracker::{
    ActiveSectionTracker, NavItem, PointerPosition, SectionId, Subscriptions, TrackerUpdate,
    attach,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Read side of the tracker, provided through context.
#[derive(Clone, Copy)]
pub struct TrackerContext {
    pub active: ReadSignal<SectionId>,
    pub pointer: ReadSignal<PointerPosition>,
    tracker: StoredValue<Rc<RefCell<ActiveSectionTracker>>, LocalStorage>,
}

impl TrackerContext {
    /// Reactive: true while `id` is the active section.
    pub fn is_active(&self, id: &str) -> bool {
        self.active.with(|active| active == id)
    }

    pub fn nav_items(&self) -> Vec<NavItem> {
        self.tracker
            .with_value(|tracker| tracker.borrow().sections().nav_items().to_vec())
    }

    /// Smooth-scroll to a section; unknown or unrendered ids do nothing.
    pub fn navigate(&self, id: &str) {
        let Some(layout) = DomLayout::new() else {
            return;
        };
        self.tracker
            .with_value(|tracker| tracker.borrow().scroll_to_section(id, &layout));
    }
}

pub fn use_tracker() -> TrackerContext {
    expect_context::<TrackerContext>()
}

#[component]
pub fn TrackerProvider(tracker: ActiveSectionTracker, children: Children) -> impl IntoView {
    let (active, set_active) = signal(tracker.active().clone());
    let (pointer, set_pointer) = signal(tracker.pointer());
    let tracker = Rc::new(RefCell::new(tracker));

    let subscriptions = match (WindowEvents::new(), DomLayout::new()) {
        (Some(events), Some(layout)) => {
            attach(Rc::clone(&tracker), &events, layout, move |update| match update {
                TrackerUpdate::Active(id) => set_active.set(id),
                TrackerUpdate::Pointer(position) => set_pointer.set(position),
            })
        }
        _ => {
            tracing::warn!("no browser window, section tracking disabled");
            Subscriptions::default()
        }
    };

    let subscriptions = StoredValue::new_local(subscriptions);
    on_cleanup(move || {
        subscriptions.try_update_value(Subscriptions::cancel_all);
        tracing::debug!("tracker detached");
    });

    provide_context(TrackerContext {
        active,
        pointer,
        tracker: StoredValue::new_local(tracker),
    });

    children()
}
