use crate::tracking::use_tracker;
use leptos::prelude::*;
use rezonance_tracker::NavItem;

/// Fixed top bar. The active section's label is emphasized and its underline
/// drawn at full width.
#[component]
pub fn Nav() -> impl IntoView {
    let tracker = use_tracker();
    let items = tracker.nav_items();

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <div class="nav-brand">
                    <span class="nav-logo">"∞"</span>
                    <span class="nav-title">"HAVOLTZ"</span>
                </div>
                <div class="nav-links">
                    {items
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| view! { <NavLink item=item index=index /> })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavLink(item: NavItem, index: usize) -> impl IntoView {
    let tracker = use_tracker();
    let id = item.id.as_str().to_string();
    let active = {
        let id = id.clone();
        Memo::new(move |_| tracker.is_active(&id))
    };

    view! {
        <button
            class=move || if active.get() { "nav-link active" } else { "nav-link" }
            style=format!("animation-delay: {:.1}s", index as f32 * 0.1)
            on:click=move |_| tracker.navigate(&id)
        >
            {item.label}
            <span class=move || {
                if active.get() { "nav-underline full" } else { "nav-underline" }
            }></span>
        </button>
    }
}
