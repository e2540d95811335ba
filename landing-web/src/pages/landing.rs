//! The landing page: hero, features, downloads, stats, FAQ

use leptos::prelude::*;

use crate::components::{DownloadSection, FaqSection, Hero, StatsStrip};
use crate::services::reveal::install_reveal_observer;

#[component]
pub fn LandingPage() -> impl IntoView {
    // Reveal targets exist once the page has rendered.
    Effect::new(move |_| {
        install_reveal_observer();
    });

    view! {
        <main>
            <Hero/>
            <FeatureSection/>
            <DownloadSection/>
            <StatsStrip/>
            <FaqSection/>
            <Footer/>
        </main>
    }
}

#[component]
fn FeatureSection() -> impl IntoView {
    view! {
        <section id="features" class="features-section">
            <h2 class="section-title">"Why Xeno?"</h2>
            <div class="feature-grid">
                <div class="feature">
                    <h3>"Fast attach"</h3>
                    <p>"Hooks in under a second, no process restarts, no staging window."</p>
                </div>
                <div class="feature">
                    <h3>"Script engine"</h3>
                    <p>"Bundled editor with syntax highlighting and a curated script hub."</p>
                </div>
                <div class="feature">
                    <h3>"Update resilient"</h3>
                    <p>"The patcher re-baselines offsets, so update day is a re-download, not a week of waiting."</p>
                </div>
                <div class="feature">
                    <h3>"Clean detach"</h3>
                    <p>"Unhooks without leaving the target process in a wedged state."</p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"Xeno is free software for people who like their tools sharp."</p>
            <p class="footer-fine">"© 2025 Xeno Team. Downloads are at your own risk."</p>
        </footer>
    }
}
