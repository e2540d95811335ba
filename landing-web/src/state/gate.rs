//! Gate state context: disclaimer acknowledgment and the patcher gate
//!
//! Signals are the source of truth once the app is mounted; DOM classes and
//! modal visibility are pure projections of them. The persisted flags seed
//! the signals at startup and receive every transition, so a reload
//! re-derives the same state.

use leptos::prelude::*;
use shared::{DisclaimerGate, ExecutorDecision, PatcherGate};

use crate::services::storage;
use crate::utils::constants::{DISCLAIMER_SEEN_KEY, PATCHER_DOWNLOADED_KEY};

/// Global gate context
#[derive(Clone, Copy)]
pub struct GateContext {
    pub disclaimer_seen: RwSignal<bool>,
    pub patcher_downloaded: RwSignal<bool>,
    /// Owned handle to the on-demand patcher-required modal. Scoped here
    /// rather than living as ambient global state.
    pub patcher_modal_open: RwSignal<bool>,
}

impl GateContext {
    /// Seed from the flag store. Runs before the first paint so a
    /// returning visitor never sees the disclaimer flash in.
    fn from_storage() -> Self {
        Self {
            disclaimer_seen: RwSignal::new(storage::flag(DISCLAIMER_SEEN_KEY)),
            patcher_downloaded: RwSignal::new(storage::flag(PATCHER_DOWNLOADED_KEY)),
            patcher_modal_open: RwSignal::new(false),
        }
    }

    /// `Visible -> Hidden` for the disclaimer modal. A no-op unless the
    /// checkbox is checked at the moment of the continue action; once
    /// acknowledged the flag never reverts within a session.
    pub fn acknowledge_disclaimer(&self, checkbox_checked: bool) {
        let gate = DisclaimerGate::from_flag(self.disclaimer_seen.get_untracked());
        if !gate.is_acknowledged() && gate.acknowledge(checkbox_checked).is_acknowledged() {
            self.disclaimer_seen.set(true);
            storage::set_flag(DISCLAIMER_SEEN_KEY);
            log::info!("disclaimer acknowledged");
        }
    }

    pub fn mark_patcher_downloaded(&self) {
        self.patcher_downloaded.set(true);
        storage::set_flag(PATCHER_DOWNLOADED_KEY);
    }

    /// Evaluate an executor request against the patcher gate as of now.
    pub fn executor_decision(&self) -> ExecutorDecision {
        PatcherGate::from_flag(self.patcher_downloaded.get_untracked()).evaluate_executor_request()
    }

    /// Show the patcher-required modal. A second trigger while one is open
    /// is a no-op; at most one instance exists.
    pub fn request_patcher_modal(&self) {
        if !self.patcher_modal_open.get_untracked() {
            self.patcher_modal_open.set(true);
        }
    }

    pub fn close_patcher_modal(&self) {
        self.patcher_modal_open.set(false);
    }
}

pub fn provide_gate_context() -> GateContext {
    let context = GateContext::from_storage();
    provide_context(context);
    context
}

pub fn use_gate_context() -> GateContext {
    expect_context::<GateContext>()
}
