//! Persistent flag store over `window.localStorage`
//!
//! Three keys are in play: the disclaimer flag, the patcher flag, and the
//! serialized download counters. Entries are created lazily on first write
//! and never deleted by this code; clearing the browser store resets every
//! gate, which is accepted (client-side state is not a security boundary).

use std::cell::Cell;

use leptos::prelude::window;
use shared::{DownloadKind, DownloadStats};

use crate::utils::constants::{DOWNLOAD_STATS_KEY, FLAG_SET};

thread_local! {
    static STORAGE_WARNED: Cell<bool> = const { Cell::new(false) };
}

/// `localStorage` handle, or `None` (with a single warning per page load)
/// when the browser denies access. Every caller degrades to in-memory-only
/// behavior in that case.
fn local_storage() -> Option<web_sys::Storage> {
    match window().local_storage() {
        Ok(Some(storage)) => Some(storage),
        _ => {
            STORAGE_WARNED.with(|warned| {
                if !warned.replace(true) {
                    log::warn!("localStorage unavailable; flags and stats will not persist");
                }
            });
            None
        }
    }
}

pub fn get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage write failed for key '{key}'");
        }
    }
}

pub fn flag(key: &str) -> bool {
    get(key).as_deref() == Some(FLAG_SET)
}

pub fn set_flag(key: &str) {
    set(key, FLAG_SET);
}

/// Current counters; absent or malformed data yields the empty map.
pub fn read_stats() -> DownloadStats {
    get(DOWNLOAD_STATS_KEY)
        .map(|raw| DownloadStats::from_json(&raw))
        .unwrap_or_default()
}

/// Read-modify-write of the counter map. Safe without locking: handlers on
/// the browser event loop cannot interleave.
pub fn record_download(kind: DownloadKind) -> DownloadStats {
    let mut stats = read_stats();
    stats.record(kind);
    set(DOWNLOAD_STATS_KEY, &stats.to_json());
    stats
}
