//! Easter-egg overlay and its keyboard listener

use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use shared::SequenceDetector;

use crate::state::party::use_party_context;
use crate::utils::constants::{PARTY_CLASS, PARTY_MESSAGE};
use crate::utils::dom::set_body_class;

#[component]
pub fn PartyOverlay() -> impl IntoView {
    let party = use_party_context();

    // The detector window is bounded to the target length, so holding a key
    // down all day costs nothing.
    let detector = Rc::new(RefCell::new(SequenceDetector::konami()));
    window_event_listener(ev::keydown, move |ev| {
        if detector.borrow_mut().push(ev.key_code()) {
            party.fire();
        }
    });

    // Rainbow body class is active while any celebration message is up.
    Effect::new(move |_| {
        set_body_class(PARTY_CLASS, !party.messages.get().is_empty());
    });

    view! {
        <div class="party-overlay">
            {move || party.messages.get().into_iter().map(|_| {
                view! { <div class="party-message">{PARTY_MESSAGE}</div> }
            }).collect::<Vec<_>>()}
        </div>
    }
}
