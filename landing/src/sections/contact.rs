use super::SectionHeader;
use leptos::prelude::*;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="container">
                <SectionHeader title="Contact Us" />
                <article class="card contact-card">
                    <h3 class="card-title">"Get in Touch"</h3>
                    <div class="contact-grid">
                        <a href="mailto:havoltz.vitcc@gmail.com" class="contact-link">
                            "📧 Email: havoltz.vitcc@gmail.com"
                        </a>
                        <a href="https://instagram.com/havoltz.vitcc" target="_blank" class="contact-link">
                            "📱 Instagram: @havoltz.vitcc"
                        </a>
                        <p>"🌐 Website: HaVoltz"</p>
                        <p>"📍 VIT Chennai, Kelambakkam"</p>
                    </div>
                    <a href="mailto:havoltz.vitcc@gmail.com?subject=ReZonance%20registration" class="btn btn-primary">
                        "Register Now"
                    </a>
                </article>
            </div>
        </section>
    }
}
