//! Hero section

use leptos::prelude::*;

use crate::services::downloads;
use crate::state::gate::use_gate_context;
use crate::state::notifications::use_notification_context;

#[component]
pub fn Hero() -> impl IntoView {
    let gate = use_gate_context();
    let notices = use_notification_context();

    view! {
        <section class="hero">
            <h1 class="hero-title">"Xeno"</h1>
            <p class="hero-tagline">"The executor that keeps up with you"</p>
            <p class="hero-description">
                "Fast attach, clean detach, and a script engine that does not fall over on update day."
            </p>
            <div class="hero-cta">
                // Platform-keyed legacy entry point; always resolves to the executor.
                <button
                    class="btn download-btn hero-download"
                    on:click=move |_| downloads::download_file("windows", gate, notices)
                >
                    "Download for Windows"
                </button>
            </div>
        </section>
    }
}
