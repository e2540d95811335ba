//! Application constants

use shared::ArtifactRef;

// localStorage keys. External contract: earlier revisions of this page
// wrote these exact keys, so they must not change.
pub const DISCLAIMER_SEEN_KEY: &str = "xenoDisclaimerSeen";
pub const PATCHER_DOWNLOADED_KEY: &str = "xenoPatcherDownloaded";
pub const DOWNLOAD_STATS_KEY: &str = "downloadStats";
pub const FLAG_SET: &str = "true";

// Release artifacts. The transfer layer passes these through untouched.
pub const PATCHER_ARTIFACT: ArtifactRef = ArtifactRef {
    url: "https://github.com/xeno-executor/releases/download/v3.2.0/XenoPatcher-v3.2.0.exe",
    filename: "XenoPatcher-v3.2.0.exe",
};
pub const EXECUTOR_ARTIFACT: ArtifactRef = ArtifactRef {
    url: "https://github.com/xeno-executor/releases/download/v3.2.0/Xeno-v3.2.0.exe",
    filename: "Xeno-v3.2.0.exe",
};

// Scroll-synced navigation. The offset matches the fixed header height.
pub const NAV_SCROLL_OFFSET: f64 = 100.0;

// Simulated download preparation delay.
pub const DOWNLOAD_PREP_MS: u32 = 2000;

// Reveal animation trigger region.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_SELECTORS: &[&str] = &[".download-card", ".faq-item", ".stat"];
pub const REVEAL_CLASS: &str = "animate-in";

// Easter egg.
pub const PARTY_DURATION_MS: u32 = 5000;
pub const PARTY_CLASS: &str = "party-mode";
pub const PARTY_MESSAGE: &str = "🎉 Party mode activated! 🎉";

// Body scroll lock while a modal is up.
pub const MODAL_OPEN_CLASS: &str = "modal-open";
