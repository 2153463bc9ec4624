use super::SectionHeader;
use leptos::prelude::*;

const PRIZES: &[(&str, &str)] = &[
    ("1st Place", "₹50,000"),
    ("2nd Place", "₹30,000"),
    ("3rd Place", "₹20,000"),
];

#[component]
pub fn Prize() -> impl IntoView {
    view! {
        <section id="prize" class="prize">
            <div class="container">
                <SectionHeader title="Prize Pool" />
                <div class="card-grid">
                    {PRIZES
                        .iter()
                        .map(|(place, amount)| view! {
                            <article class="card prize-card">
                                <h3 class="card-title">{*place}</h3>
                                <p class="prize-amount">{*amount}</p>
                            </article>
                        })
                        .collect_view()}
                </div>
                <p class="section-note">
                    "Team sizes: 2-3 members (Rs. 300), 4 members (Rs. 500)"
                </p>
            </div>
        </section>
    }
}
