use super::SectionHeader;
use leptos::prelude::*;

const EVENTS: &[(&str, &str)] = &[
    ("Registration Opens", "August 15th, 2024"),
    ("Hackathon Begins", "September 3rd, 8:00 AM"),
    ("Final Presentations", "September 4th, 10:00 AM"),
];

#[component]
pub fn Timeline() -> impl IntoView {
    view! {
        <section id="timeline" class="timeline">
            <div class="container">
                <SectionHeader title="Timeline" />
                <ol class="timeline-list">
                    {EVENTS
                        .iter()
                        .map(|(title, date)| view! {
                            <li class="card timeline-entry">
                                <span class="timeline-dot"></span>
                                <div>
                                    <h3 class="card-title">{*title}</h3>
                                    <p class="card-text">{*date}</p>
                                </div>
                            </li>
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
