//! Event subscription seam and tracker wiring.
//!
//! Signals reach the tracker through an [`EventSource`]. Every subscription is
//! a [`Subscription`] guard: dropping it unsubscribes, so a page view that
//! holds its [`Subscriptions`] for exactly its mounted lifetime can never
//! leave a handler behind after teardown.

use crate::layout::Layout;
use crate::pointer::PointerPosition;
use crate::section::SectionId;
use crate::tracker::ActiveSectionTracker;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Which signal a handler is interested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerMove,
    Scroll,
}

/// Inbound signal from the host runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerEvent {
    /// Absolute pointer coordinates
    PointerMove { x: i32, y: i32 },
    /// No payload; the offset is read from the layout when handled
    Scroll,
}

impl TrackerEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            TrackerEvent::PointerMove { .. } => EventKind::PointerMove,
            TrackerEvent::Scroll => EventKind::Scroll,
        }
    }
}

/// Observable state change pushed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerUpdate {
    Active(SectionId),
    Pointer(PointerPosition),
}

pub type EventHandler = Box<dyn FnMut(&TrackerEvent)>;

/// Something that delivers [`TrackerEvent`]s to subscribed handlers.
pub trait EventSource {
    fn subscribe(&self, kind: EventKind, handler: EventHandler) -> Subscription;
}

/// Scoped registration. Unsubscribes exactly once, on [`cancel`] or drop.
///
/// [`cancel`]: Subscription::cancel
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release (e.g. no window to listen on).
    pub fn empty() -> Self {
        Self { release: None }
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// A set of subscriptions released together.
#[derive(Debug, Default)]
#[must_use = "dropping Subscriptions unsubscribes everything it holds"]
pub struct Subscriptions {
    inner: Vec<Subscription>,
}

impl Subscriptions {
    pub fn push(&mut self, subscription: Subscription) {
        self.inner.push(subscription);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn cancel_all(&mut self) {
        self.inner.clear();
    }
}

/// Subscribe `tracker` to pointer and scroll signals from `source`.
///
/// `on_update` runs after each observable change, with the tracker already
/// released so it may be read again. Drop the returned [`Subscriptions`] to
/// tear both handlers down.
pub fn attach<S, L, F>(
    tracker: Rc<RefCell<ActiveSectionTracker>>,
    source: &S,
    layout: L,
    on_update: F,
) -> Subscriptions
where
    S: EventSource + ?Sized,
    L: Layout + 'static,
    F: Fn(TrackerUpdate) + 'static,
{
    let on_update = Rc::new(on_update);
    let mut subscriptions = Subscriptions::default();

    let pointer_tracker = Rc::clone(&tracker);
    let pointer_update = Rc::clone(&on_update);
    subscriptions.push(source.subscribe(
        EventKind::PointerMove,
        Box::new(move |event| {
            let TrackerEvent::PointerMove { x, y } = *event else {
                return;
            };
            let pointer = {
                let mut tracker = pointer_tracker.borrow_mut();
                if !tracker.on_pointer_move(x, y) {
                    return;
                }
                tracker.pointer()
            };
            pointer_update(TrackerUpdate::Pointer(pointer));
        }),
    ));

    let scroll_tracker = Rc::clone(&tracker);
    subscriptions.push(source.subscribe(
        EventKind::Scroll,
        Box::new(move |event| {
            if event.kind() != EventKind::Scroll {
                return;
            }
            let active = {
                let mut tracker = scroll_tracker.borrow_mut();
                if !tracker.on_scroll(&layout) {
                    return;
                }
                tracker.active().clone()
            };
            on_update(TrackerUpdate::Active(active));
        }),
    ));

    tracing::debug!("tracker attached ({} subscriptions)", subscriptions.len());
    subscriptions
}

struct Listener {
    id: u64,
    kind: EventKind,
    handler: Rc<RefCell<EventHandler>>,
}

#[derive(Default)]
struct BusState {
    next_id: u64,
    listeners: Vec<Listener>,
}

/// Single-threaded in-memory [`EventSource`].
///
/// Handlers may unsubscribe (or subscribe) from inside a callback; the
/// listener set is snapshotted before each dispatch.
#[derive(Clone, Default)]
pub struct EventBus {
    state: Rc<RefCell<BusState>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to every handler subscribed to its kind.
    pub fn emit(&self, event: TrackerEvent) {
        let kind = event.kind();
        let handlers: Vec<_> = self
            .state
            .borrow()
            .listeners
            .iter()
            .filter(|listener| listener.kind == kind)
            .map(|listener| Rc::clone(&listener.handler))
            .collect();

        for handler in handlers {
            (handler.borrow_mut())(&event);
        }
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.state
            .borrow()
            .listeners
            .iter()
            .filter(|listener| listener.kind == kind)
            .count()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("EventBus")
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

impl EventSource for EventBus {
    fn subscribe(&self, kind: EventKind, handler: EventHandler) -> Subscription {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.push(Listener {
                id,
                kind,
                handler: Rc::new(RefCell::new(handler)),
            });
            id
        };

        let state: Weak<RefCell<BusState>> = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = state.upgrade() {
                state
                    .borrow_mut()
                    .listeners
                    .retain(|listener| listener.id != id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FixedLayout;
    use crate::section::{NavItem, SectionBounds, SectionList};
    use std::cell::Cell;

    fn tracker() -> Rc<RefCell<ActiveSectionTracker>> {
        let sections =
            SectionList::new("hero", vec![NavItem::new("about", "ABOUT")]).expect("valid");
        Rc::new(RefCell::new(ActiveSectionTracker::new(sections, 100.0)))
    }

    fn layout() -> Rc<FixedLayout> {
        Rc::new(
            FixedLayout::new()
                .with_section("hero", SectionBounds::new(0.0, 800.0))
                .with_section("about", SectionBounds::new(800.0, 800.0)),
        )
    }

    #[test]
    fn test_subscription_releases_once() {
        let released = Rc::new(Cell::new(0));
        let counter = Rc::clone(&released);
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));
        subscription.cancel();
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_subscription_releases_on_drop() {
        let released = Rc::new(Cell::new(false));
        let flag = Rc::clone(&released);
        {
            let _subscription = Subscription::new(move || flag.set(true));
            assert!(!released.get());
        }
        assert!(released.get());
    }

    #[test]
    fn test_bus_routes_by_kind() {
        let bus = EventBus::new();
        let scrolls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&scrolls);
        let _sub = bus.subscribe(
            EventKind::Scroll,
            Box::new(move |_| counter.set(counter.get() + 1)),
        );

        bus.emit(TrackerEvent::PointerMove { x: 1, y: 1 });
        bus.emit(TrackerEvent::Scroll);
        assert_eq!(scrolls.get(), 1);
    }

    #[test]
    fn test_handler_may_unsubscribe_itself() {
        let bus = EventBus::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let inner = Rc::clone(&slot);
        let sub = bus.subscribe(
            EventKind::Scroll,
            Box::new(move |_| {
                inner.borrow_mut().take();
            }),
        );
        *slot.borrow_mut() = Some(sub);

        bus.emit(TrackerEvent::Scroll);
        assert_eq!(bus.listener_count(EventKind::Scroll), 0);
    }

    #[test]
    fn test_attach_forwards_changes_only() {
        let bus = EventBus::new();
        let tracker = tracker();
        let layout = layout();
        let updates = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&updates);

        let _subs = attach(Rc::clone(&tracker), &bus, Rc::clone(&layout), move |update| {
            sink.borrow_mut().push(update)
        });

        bus.emit(TrackerEvent::PointerMove { x: 30, y: 40 });
        bus.emit(TrackerEvent::PointerMove { x: 30, y: 40 });
        layout.set_scroll_offset(900.0);
        bus.emit(TrackerEvent::Scroll);
        bus.emit(TrackerEvent::Scroll);

        assert_eq!(
            *updates.borrow(),
            vec![
                TrackerUpdate::Pointer(PointerPosition::new(30, 40)),
                TrackerUpdate::Active(SectionId::new("about")),
            ]
        );
    }

    #[test]
    fn test_update_callback_can_read_tracker() {
        let bus = EventBus::new();
        let tracker = tracker();
        let reader = Rc::clone(&tracker);
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);

        let _subs = attach(Rc::clone(&tracker), &bus, layout(), move |_| {
            *sink.borrow_mut() = Some(reader.borrow().pointer());
        });

        bus.emit(TrackerEvent::PointerMove { x: 5, y: 6 });
        assert_eq!(*seen.borrow(), Some(PointerPosition::new(5, 6)));
    }

    #[test]
    fn test_dropping_subscriptions_detaches_tracker() {
        let bus = EventBus::new();
        let tracker = tracker();
        let layout = layout();

        let subs = attach(Rc::clone(&tracker), &bus, Rc::clone(&layout), |_| {});
        assert_eq!(subs.len(), 2);
        assert_eq!(bus.listener_count(EventKind::Scroll), 1);
        assert_eq!(bus.listener_count(EventKind::PointerMove), 1);
        drop(subs);

        assert_eq!(bus.listener_count(EventKind::Scroll), 0);
        assert_eq!(bus.listener_count(EventKind::PointerMove), 0);

        layout.set_scroll_offset(900.0);
        bus.emit(TrackerEvent::Scroll);
        bus.emit(TrackerEvent::PointerMove { x: 9, y: 9 });
        assert_eq!(tracker.borrow().active().as_str(), "hero");
        assert_eq!(tracker.borrow().pointer(), PointerPosition::default());
    }

    #[test]
    fn test_subscription_outliving_bus_is_harmless() {
        let bus = EventBus::new();
        let sub = bus.subscribe(EventKind::Scroll, Box::new(|_| {}));
        drop(bus);
        drop(sub);
    }
}
