//! Patcher-required modal, created on demand when the executor is gated

use leptos::prelude::*;

use crate::services::downloads;
use crate::state::gate::use_gate_context;
use crate::state::notifications::use_notification_context;

#[component]
pub fn PatcherRequiredModal() -> impl IntoView {
    let gate = use_gate_context();
    let notices = use_notification_context();

    view! {
        {move || gate.patcher_modal_open.get().then(|| view! {
            <div class="modal-overlay" id="patcherModal">
                <div class="modal patcher-modal">
                    <h2>"Patcher required"</h2>
                    <p class="modal-text">
                        "Xeno needs its patcher to run once before the executor will attach.
                        Grab the patcher first; the executor unlocks right after."
                    </p>
                    <div class="modal-actions">
                        <button
                            class="btn btn-primary"
                            on:click=move |_| {
                                downloads::request_patcher_download(gate, notices);
                                gate.close_patcher_modal();
                            }
                        >
                            "Download patcher"
                        </button>
                        <button class="btn btn-secondary" on:click=move |_| gate.close_patcher_modal()>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        })}
    }
}
