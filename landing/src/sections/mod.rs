// Landing page sections
// Developed by the HaVoltz web team (c)2025

use leptos::prelude::*;

mod about;
mod contact;
mod cursor;
mod hero;
mod nav;
mod people;
mod prize;
mod timeline;
mod tracks;

pub use about::About;
pub use contact::Contact;
pub use cursor::CursorFollower;
pub use hero::Hero;
pub use nav::Nav;
pub use people::{Organisers, Sponsors};
pub use prize::Prize;
pub use timeline::Timeline;
pub use tracks::Tracks;

/// Centered title + divider shared by the content sections.
#[component]
fn SectionHeader(title: &'static str) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-title">{title}</h2>
            <div class="section-divider"></div>
        </div>
    }
}
