//! Stats strip between the download and FAQ sections

use leptos::prelude::*;

use crate::services::storage;

#[component]
pub fn StatsStrip() -> impl IntoView {
    // Snapshot at mount; the marketing numbers around it are static anyway.
    let device_total = storage::read_stats().total();

    view! {
        <section id="stats" class="stats-section">
            <div class="stats-grid">
                <div class="stat">
                    <span class="stat-value">"2.4M+"</span>
                    <span class="stat-label">"Downloads"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">"120k"</span>
                    <span class="stat-label">"Daily users"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">"99.2%"</span>
                    <span class="stat-label">"Script pass rate"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{device_total.to_string()}</span>
                    <span class="stat-label">"Downloads from this device"</span>
                </div>
            </div>
        </section>
    }
}
