use super::SectionHeader;
use leptos::prelude::*;

const FACULTY: &[&str] = &["Dr. JAYAPRAKASH R", "Dr. SETHIL KUMAR"];
const STUDENTS: &[&str] = &["TARUN PRABHAKAR", "JACOB SAM"];
const MAIN_ORGANIZER: &[&str] = &["Main Organizer"];
const SUPPORTING_PARTNER: &[&str] = &["Supporting Partner"];

#[component]
pub fn Organisers() -> impl IntoView {
    view! {
        <section id="organisers" class="organisers">
            <div class="container">
                <SectionHeader title="Organisers" />
                <div class="card-grid two-up">
                    <PeopleCard heading="FACULTY COORDINATORS" names=FACULTY />
                    <PeopleCard heading="STUDENT COORDINATORS" names=STUDENTS />
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Sponsors() -> impl IntoView {
    view! {
        <section id="sponsors" class="sponsors">
            <div class="container">
                <SectionHeader title="Sponsors" />
                <p class="section-description">
                    "We're grateful to our sponsors who make ReZonance possible."
                </p>
                <div class="card-grid two-up">
                    <PeopleCard heading="VIT Chennai" names=MAIN_ORGANIZER />
                    <PeopleCard heading="Office of Student Welfare" names=SUPPORTING_PARTNER />
                </div>
            </div>
        </section>
    }
}

#[component]
fn PeopleCard(heading: &'static str, names: &'static [&'static str]) -> impl IntoView {
    view! {
        <article class="card people-card">
            <h3 class="card-title">{heading}</h3>
            {names
                .iter()
                .map(|name| view! { <p class="card-text">{*name}</p> })
                .collect_view()}
        </article>
    }
}
