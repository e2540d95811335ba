//! FAQ accordion, single entry open at a time

use leptos::prelude::*;
use shared::AccordionState;

const FAQ_ENTRIES: &[(&str, &str)] = &[
    (
        "Is Xeno free?",
        "Yes. The patcher and the executor are both free downloads. Anyone charging for them is reselling you a zip file.",
    ),
    (
        "Why do I have to download the patcher first?",
        "The patcher re-baselines offsets on your machine so the executor can attach cleanly. Running the executor without it just fails later and uglier, so the site makes you grab the patcher first.",
    ),
    (
        "My antivirus flags the download. Is that expected?",
        "Yes. Process attachment looks identical to what malware does, so heuristics fire on it. Whitelist the folder or don't run it; there is no third option.",
    ),
    (
        "Does Xeno survive game updates?",
        "After an update, re-run the patcher and you are back. No waiting on a new executor build for offset-only changes.",
    ),
    (
        "Where do I report bugs?",
        "The Discord linked in the footer. Include the script that broke and the version from the window title, or the report gets skipped.",
    ),
];

#[component]
pub fn FaqSection() -> impl IntoView {
    let accordion = RwSignal::new(AccordionState::default());

    view! {
        <section id="faq" class="faq-section">
            <h2 class="section-title">"Frequently Asked Questions"</h2>
            <div class="faq-list">
                {FAQ_ENTRIES.iter().enumerate().map(|(index, (question, answer))| {
                    view! {
                        <div class="faq-item" class:active=move || accordion.get().is_open(index)>
                            <button
                                class="faq-question"
                                on:click=move |_| accordion.update(|state| state.toggle(index))
                            >
                                <span>{*question}</span>
                                <span class="faq-chevron">"▾"</span>
                            </button>
                            <div class="faq-answer">
                                <p>{*answer}</p>
                            </div>
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
