use crate::tracking::use_tracker;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    let tracker = use_tracker();

    view! {
        <section id="hero" class="hero">
            <div class="container">
                <h1 class="hero-title">
                    "REZ"<span class="hero-title-accent">"O"</span>"NANCE"
                </h1>
                <div class="hero-description">
                    <p>"GET READY FOR THE YEAR'S BIGGEST 24 HOUR HACKATHON"</p>
                    <p>"WHERE IDEAS SPARK, CIRCUITS CLICK AND INNOVATION NEVER SLEEPS"</p>
                </div>
                <div class="hero-actions">
                    <button class="btn btn-primary" on:click=move |_| tracker.navigate("about")>
                        "JOIN THE RACE →"
                    </button>
                </div>
                <div class="hero-cards">
                    <InfoCard title="VENUE" info="MG Auditorium" />
                    <InfoCard title="DATE" info="3rd & 4th Sept" />
                    <InfoCard title="TIME" info="8am to 12pm" />
                </div>
            </div>
        </section>
        <Marquee />
    }
}

#[component]
fn InfoCard(title: &'static str, info: &'static str) -> impl IntoView {
    view! {
        <article class="card info-card">
            <h3 class="card-title">{title}</h3>
            <p class="card-text">{info}</p>
        </article>
    }
}

// Not a tracked section: it sits between hero and about without an id.
#[component]
fn Marquee() -> impl IntoView {
    let words = ["INNOVATION", "TECHNOLOGY", "CREATIVITY"];

    view! {
        <section class="marquee" aria-hidden="true">
            <div class="marquee-track">
                {words
                    .iter()
                    .cycle()
                    .take(6)
                    .map(|word| view! {
                        <span class="marquee-word">{*word}</span>
                        <span class="marquee-dot">"•"</span>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
