//! Download kinds, artifact references, and the persisted counter map

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counter key under which the derived sum is stored.
const TOTAL_FIELD: &str = "total";

/// The two artifacts the page can hand out.
///
/// The executor is the product itself; the patcher is the preparation step
/// that has to run on the user's machine first. [`PatcherGate`] encodes the
/// ordering between them.
///
/// [`PatcherGate`]: crate::model::gate::PatcherGate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadKind {
    Patcher,
    Executor,
}

impl DownloadKind {
    /// Stable string form, used both as the tracking counter key and in log
    /// lines. Must not change: it is part of the persisted `downloadStats`
    /// contract.
    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadKind::Patcher => "patcher",
            DownloadKind::Executor => "executor",
        }
    }

    /// Human-readable label for notifications.
    pub fn label(&self) -> &'static str {
        match self {
            DownloadKind::Patcher => "Xeno Patcher",
            DownloadKind::Executor => "Xeno",
        }
    }
}

/// A fixed `(url, suggested filename)` pair on the static file host.
///
/// The transfer layer's only obligation is to initiate a browser-native
/// download for the reference; it must not rewrite either field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArtifactRef {
    pub url: &'static str,
    pub filename: &'static str,
}

/// Cumulative download counters, persisted as a flat JSON object.
///
/// Every tracked event increments its kind's counter by one and recomputes
/// `total` as the sum of every other field. Counter keys written by older
/// page revisions (e.g. a bare platform name) are preserved and still count
/// towards `total`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DownloadStats {
    counts: BTreeMap<String, u64>,
}

impl DownloadStats {
    /// Parse the persisted JSON. Malformed or absent data is recovered
    /// locally by substituting the empty map; it is never surfaced.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }

    /// Record one tracked event and recompute the derived `total`.
    pub fn record(&mut self, kind: DownloadKind) {
        *self.counts.entry(kind.as_str().to_string()).or_insert(0) += 1;
        let total: u64 = self
            .counts
            .iter()
            .filter(|(key, _)| key.as_str() != TOTAL_FIELD)
            .map(|(_, count)| count)
            .sum();
        self.counts.insert(TOTAL_FIELD.to_string(), total);
    }

    pub fn count(&self, kind: DownloadKind) -> u64 {
        self.counts.get(kind.as_str()).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.get(TOTAL_FIELD).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_increments_kind_and_total() {
        let mut stats = DownloadStats::default();
        stats.record(DownloadKind::Patcher);
        assert_eq!(stats.count(DownloadKind::Patcher), 1);
        assert_eq!(stats.total(), 1);

        stats.record(DownloadKind::Executor);
        stats.record(DownloadKind::Executor);
        assert_eq!(stats.count(DownloadKind::Executor), 2);
        assert_eq!(stats.count(DownloadKind::Patcher), 1);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn test_total_excludes_itself() {
        let mut stats = DownloadStats::default();
        for _ in 0..5 {
            stats.record(DownloadKind::Executor);
        }
        // If `total` were summed into itself it would double on each record.
        assert_eq!(stats.count(DownloadKind::Executor), 5);
        assert_eq!(stats.total(), 5);
    }

    #[test]
    fn test_malformed_json_recovers_to_empty() {
        assert_eq!(DownloadStats::from_json("not json"), DownloadStats::default());
        assert_eq!(DownloadStats::from_json(""), DownloadStats::default());
        assert_eq!(DownloadStats::from_json("[1,2,3]"), DownloadStats::default());
    }

    #[test]
    fn test_legacy_counter_keys_survive_and_count() {
        let mut stats = DownloadStats::from_json(r#"{"windows":3,"total":3}"#);
        stats.record(DownloadKind::Executor);
        assert_eq!(stats.count(DownloadKind::Executor), 1);
        assert_eq!(stats.total(), 4);
        assert!(stats.to_json().contains(r#""windows":3"#));
    }

    #[test]
    fn test_json_shape_is_flat() {
        let mut stats = DownloadStats::default();
        stats.record(DownloadKind::Patcher);
        stats.record(DownloadKind::Executor);
        assert_eq!(stats.to_json(), r#"{"executor":1,"patcher":1,"total":2}"#);
    }
}
