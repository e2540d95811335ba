//! Domain types and state machines for the landing page

pub mod downloads;
pub mod faq;
pub mod gate;
pub mod konami;
pub mod nav;
pub mod notify;
pub mod reveal;

pub use downloads::{ArtifactRef, DownloadKind, DownloadStats};
pub use faq::AccordionState;
pub use gate::{DisclaimerGate, ExecutorDecision, PatcherGate};
pub use konami::{SequenceDetector, KONAMI_SEQUENCE};
pub use nav::{active_section, SectionBounds};
pub use notify::{Notification, NotificationStyle};
pub use reveal::RevealSet;
