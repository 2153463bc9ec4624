// ReZonance Landing Page - Leptos 0.8 Edition
// Developed by the HaVoltz web team (c)2025

pub mod config;
pub mod dom;
pub mod logging;
pub mod sections;
pub mod tracking;

use config::{SITE_TOML, SiteConfig};
use leptos::prelude::*;
use rezonance_tracker::ActiveSectionTracker;
use sections::*;
use tracking::TrackerProvider;

/// Load config, start logging, mount the page.
pub fn run() {
    console_error_panic_hook::set_once();

    let (config, problem) = match SiteConfig::parse(SITE_TOML) {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };
    logging::init(config.level());
    if let Some(e) = problem {
        tracing::warn!("site.toml: {}; using defaults", e);
    }

    let tracker = config.tracker.tracker_or_default();
    tracing::info!(
        "mounting with {} sections, bias {}",
        tracker.sections().len(),
        tracker.bias()
    );
    leptos::mount::mount_to_body(move || view! { <App tracker=tracker /> });
}

#[component]
pub fn App(tracker: ActiveSectionTracker) -> impl IntoView {
    view! {
        <TrackerProvider tracker=tracker>
            <CursorFollower />
            <Nav />
            <main>
                <Hero />
                <About />
                <Tracks />
                <Prize />
                <Timeline />
                <Organisers />
                <Sponsors />
                <Contact />
            </main>
        </TrackerProvider>
    }
}
