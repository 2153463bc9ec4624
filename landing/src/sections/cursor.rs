use crate::tracking::use_tracker;
use leptos::prelude::*;

/// Decorative dot that follows the pointer; hidden until the first move.
#[component]
pub fn CursorFollower() -> impl IntoView {
    let tracker = use_tracker();

    view! {
        <div
            class="cursor-follower"
            aria-hidden="true"
            style=move || tracker.pointer.get().follower().style()
        ></div>
    }
}
