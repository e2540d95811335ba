//! Download flow controller for the patcher-before-executor gate
//!
//! Patcher requests always go through; executor requests are evaluated
//! against the patcher gate and a blocked request produces the
//! patcher-required modal instead of a transfer. The gate is advisory
//! client-local state: a user clearing storage bypasses it, and nothing
//! here pretends to be a security boundary.

use leptos::prelude::document;
use shared::{ArtifactRef, DownloadKind, ExecutorDecision, Notification};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

use crate::services::storage;
use crate::state::gate::GateContext;
use crate::state::notifications::NotificationContext;
use crate::utils::constants::{EXECUTOR_ARTIFACT, PATCHER_ARTIFACT};

/// Initiate a browser-native transfer via a temporary anchor element.
fn trigger_file_download(artifact: &ArtifactRef) -> Result<(), JsValue> {
    let document = document();
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.unchecked_into();
    anchor.set_href(artifact.url);
    anchor.set_download(artifact.filename);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}

fn track(kind: DownloadKind) {
    let timestamp = String::from(js_sys::Date::new_0().to_iso_string());
    log::info!("Download tracked: {} - {}", kind.as_str(), timestamp);
    storage::record_download(kind);
}

/// Patcher downloads are ungated: transfer, remember the flag, notify,
/// track. Succeeds regardless of prior state.
pub fn request_patcher_download(gate: GateContext, notices: NotificationContext) {
    if let Err(err) = trigger_file_download(&PATCHER_ARTIFACT) {
        log::warn!("patcher download could not be started: {err:?}");
        return;
    }
    gate.mark_patcher_downloaded();
    notices.push(Notification::success(
        "Patcher download started! Run it once before launching Xeno.",
    ));
    track(DownloadKind::Patcher);
}

/// Executor downloads sit behind the patcher gate. A blocked request opens
/// the patcher-required modal and records nothing. A hard precondition,
/// not a retryable failure.
pub fn request_executor_download(gate: GateContext, notices: NotificationContext) {
    if gate.executor_decision() == ExecutorDecision::Blocked {
        log::info!("executor download blocked: patcher not downloaded yet");
        gate.request_patcher_modal();
        return;
    }
    if let Err(err) = trigger_file_download(&EXECUTOR_ARTIFACT) {
        log::warn!("executor download could not be started: {err:?}");
        return;
    }
    notices.push(Notification::success("Download started successfully!"));
    track(DownloadKind::Executor);
}

/// Legacy entry point used by markup that passed a platform key. It has
/// always resolved to the executor download regardless of the argument;
/// kept for compatibility.
pub fn download_file(_platform: &str, gate: GateContext, notices: NotificationContext) {
    request_executor_download(gate, notices);
}
