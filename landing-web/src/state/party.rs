//! Easter-egg celebration state

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::utils::constants::PARTY_DURATION_MS;

#[derive(Clone, Copy)]
pub struct PartyContext {
    /// Ids of celebration messages currently on screen. A fresh match
    /// appends even while an earlier message is still up; the brief overlap
    /// is accepted.
    pub messages: RwSignal<Vec<u64>>,
    next_id: StoredValue<u64>,
}

impl PartyContext {
    fn new() -> Self {
        Self {
            messages: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// One-shot celebration that auto-reverts after the fixed duration.
    pub fn fire(&self) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        log::info!("easter egg activated");
        let messages = self.messages;
        messages.update(|list| list.push(id));
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(PARTY_DURATION_MS).await;
            messages.update(|list| list.retain(|&message_id| message_id != id));
        });
    }
}

pub fn provide_party_context() -> PartyContext {
    let context = PartyContext::new();
    provide_context(context);
    context
}

pub fn use_party_context() -> PartyContext {
    expect_context::<PartyContext>()
}
