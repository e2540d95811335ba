//! UI Components

pub mod disclaimer;
pub mod download;
pub mod faq;
pub mod hero;
pub mod navbar;
pub mod notification;
pub mod party;
pub mod patcher_modal;
pub mod stats;

pub use disclaimer::DisclaimerModal;
pub use download::DownloadSection;
pub use faq::FaqSection;
pub use hero::Hero;
pub use navbar::Navbar;
pub use notification::NotificationHost;
pub use party::PartyOverlay;
pub use patcher_modal::PatcherRequiredModal;
pub use stats::StatsStrip;
