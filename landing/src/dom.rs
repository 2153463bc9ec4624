//! Browser implementations of the tracker seams.
//!
//! `DomLayout` reads live geometry from the document on every call;
//! `WindowEvents` turns window `mousemove`/`scroll` events into tracker
//! signals and removes its listeners when the subscription is released.

use rezonance_tracker::{
    EventHandler, EventKind, EventSource, Layout, ScrollBehavior, SectionBounds, Subscription,
    TrackerEvent,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, MouseEvent, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Live page geometry from `window` + `document`.
#[derive(Debug, Clone)]
pub struct DomLayout {
    window: web_sys::Window,
}

impl DomLayout {
    /// `None` outside a browser.
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }

    fn section_element(&self, id: &str) -> Option<HtmlElement> {
        self.window
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl Layout for DomLayout {
    fn scroll_offset(&self) -> Option<f64> {
        self.window.scroll_y().ok()
    }

    fn section_bounds(&self, id: &str) -> Option<SectionBounds> {
        let element = self.section_element(id)?;
        Some(SectionBounds::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }

    fn scroll_into_view(&self, id: &str, behavior: ScrollBehavior) -> bool {
        let Some(element) = self.section_element(id) else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Window-level pointer and scroll signals.
#[derive(Debug, Clone)]
pub struct WindowEvents {
    window: web_sys::Window,
}

impl WindowEvents {
    /// `None` outside a browser.
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }

    fn listen(
        &self,
        event_name: &'static str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> Subscription {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(web_sys::Event)>);

        if self
            .window
            .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("could not listen for window {} events", event_name);
            return Subscription::empty();
        }

        let window = self.window.clone();
        Subscription::new(move || {
            let _ = window
                .remove_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            tracing::trace!("removed window {} listener", event_name);
            // `closure` drops here, after the browser let go of it
        })
    }
}

impl EventSource for WindowEvents {
    fn subscribe(&self, kind: EventKind, mut handler: EventHandler) -> Subscription {
        match kind {
            EventKind::PointerMove => self.listen("mousemove", move |event| {
                if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                    handler(&TrackerEvent::PointerMove {
                        x: mouse.client_x(),
                        y: mouse.client_y(),
                    });
                }
            }),
            EventKind::Scroll => self.listen("scroll", move |_| handler(&TrackerEvent::Scroll)),
        }
    }
}
