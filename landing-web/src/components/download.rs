//! Download section with the two-stage patcher/executor flow

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use shared::DownloadKind;

use crate::services::downloads;
use crate::state::gate::use_gate_context;
use crate::state::notifications::use_notification_context;
use crate::utils::constants::DOWNLOAD_PREP_MS;

#[component]
pub fn DownloadSection() -> impl IntoView {
    view! {
        <section id="download" class="download-section">
            <h2 class="section-title">"Get Xeno"</h2>
            <p class="section-subtitle">"Run the patcher once, then grab the executor."</p>
            <div class="download-grid">
                <DownloadCard
                    kind=DownloadKind::Patcher
                    step="Step 1"
                    title="Xeno Patcher"
                    description="Prepares your system for the executor. Required once per install."
                />
                <DownloadCard
                    kind=DownloadKind::Executor
                    step="Step 2"
                    title="Xeno Executor"
                    description="The executor itself. Unlocks after the patcher has been downloaded."
                />
            </div>
        </section>
    }
}

/// One download card. The button simulates a short preparation delay before
/// the flow runs; re-clicks while preparing are ignored (the pending
/// completion cannot be cancelled, so it must not be duplicated either).
#[component]
fn DownloadCard(
    kind: DownloadKind,
    step: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    let gate = use_gate_context();
    let notices = use_notification_context();
    let preparing = RwSignal::new(false);

    let on_click = move |_| {
        if preparing.get_untracked() {
            return;
        }
        preparing.set(true);
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(DOWNLOAD_PREP_MS).await;
            preparing.set(false);
            match kind {
                DownloadKind::Patcher => downloads::request_patcher_download(gate, notices),
                DownloadKind::Executor => downloads::request_executor_download(gate, notices),
            }
        });
    };

    view! {
        <div class="download-card">
            <span class="download-step">{step}</span>
            <h3 class="download-title">{title}</h3>
            <p class="download-description">{description}</p>
            <button
                class="btn download-btn"
                prop:disabled=move || preparing.get()
                on:click=on_click
            >
                {move || if preparing.get() { "Preparing download..." } else { "Download" }}
            </button>
        </div>
    }
}
