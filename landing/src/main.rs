// ReZonance Landing Page - Leptos 0.8 Edition
// Developed by the HaVoltz web team (c)2025

fn main() {
    rezonance_landing::run();
}
