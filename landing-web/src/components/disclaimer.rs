//! First-visit disclaimer modal

use leptos::prelude::*;

use crate::state::gate::use_gate_context;
use crate::utils::constants::MODAL_OPEN_CLASS;
use crate::utils::dom::set_body_class;

#[component]
pub fn DisclaimerModal() -> impl IntoView {
    let gate = use_gate_context();
    let checked = RwSignal::new(false);

    // Body scroll lock is a projection of the gate state.
    Effect::new(move |_| {
        set_body_class(MODAL_OPEN_CLASS, !gate.disclaimer_seen.get());
    });

    view! {
        {move || (!gate.disclaimer_seen.get()).then(|| view! {
            <div class="modal-overlay" id="disclaimerModal">
                <div class="modal disclaimer-modal">
                    <h2>"Read this first"</h2>
                    <p class="modal-text">
                        "Xeno attaches to running processes at a level most software never touches.
                        Antivirus products will flag the download, using it against games you do not
                        own is on you, and the team ships no warranty of any kind."
                    </p>
                    <label class="modal-checkbox">
                        <input
                            type="checkbox"
                            id="understood"
                            prop:checked=move || checked.get()
                            on:change=move |ev| checked.set(event_target_checked(&ev))
                        />
                        <span>" I understand the risks and want to continue"</span>
                    </label>
                    <button
                        id="continueBtn"
                        class="btn btn-continue"
                        class:disabled=move || !checked.get()
                        prop:disabled=move || !checked.get()
                        on:click=move |_| gate.acknowledge_disclaimer(checked.get_untracked())
                    >
                        "Continue"
                    </button>
                </div>
            </div>
        })}
    }
}
