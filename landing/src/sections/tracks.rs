use super::SectionHeader;
use leptos::prelude::*;

#[component]
pub fn Tracks() -> impl IntoView {
    view! {
        <section id="tracks" class="tracks">
            <div class="container">
                <SectionHeader title="Tracks" />
                <div class="card-grid">
                    <TrackCard
                        title="EMBEDDED SYSTEMS"
                        description="Design and develop innovative embedded solutions that push the boundaries of hardware-software integration"
                    />
                    <TrackCard
                        title="IoT"
                        description="Create connected devices for the future, building the next generation of smart, interconnected systems"
                    />
                    <TrackCard
                        title="CIRCUIT DESIGN"
                        description="Engineer cutting-edge electronic circuits that form the foundation of tomorrow's technology"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn TrackCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <article class="card track-card">
            <h3 class="card-title">{title}</h3>
            <p class="card-text">{description}</p>
        </article>
    }
}
