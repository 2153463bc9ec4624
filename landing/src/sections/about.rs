use super::SectionHeader;
use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container">
                <SectionHeader title="About" />
                <p class="section-description">
                    "ReZonance is VIT Chennai's premier 24-hour hackathon focused on electronics and innovation. "
                    "Join us for an electrifying experience where creativity meets technology."
                </p>
            </div>
        </section>
    }
}
