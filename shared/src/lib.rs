//! # Shared Domain Logic Library
//!
//! Platform-independent logic for the Xeno landing page. The `landing-web`
//! frontend keeps all of its browser glue (DOM, storage, timers) in its own
//! crate; everything that can be expressed and tested without a browser
//! lives here.
//!
//! ## Structure
//!
//! - **[`model`]**: domain types and state machines
//!   - **[`model::downloads`]**: download kinds, artifact references, counters
//!   - **[`model::gate`]**: disclaimer and patcher gate state machines
//!   - **[`model::faq`]**: single-open accordion state
//!   - **[`model::konami`]**: bounded key-sequence detector
//!   - **[`model::nav`]**: scroll-position to section resolution
//!   - **[`model::notify`]**: transient notification model
//!   - **[`model::reveal`]**: one-shot reveal bookkeeping
//!
//! ## Wire Format
//!
//! [`model::downloads::DownloadStats`] is the only persisted structure. It
//! serializes to a flat JSON object via `serde`, matching the
//! `downloadStats` localStorage entry the page has always written:
//!
//! ```rust
//! use shared::model::downloads::{DownloadKind, DownloadStats};
//!
//! let mut stats = DownloadStats::default();
//! stats.record(DownloadKind::Executor);
//! assert_eq!(stats.to_json(), r#"{"executor":1,"total":1}"#);
//! ```

pub mod model;

// Re-export the model types; this crate is the contract between the
// frontend components and anything that later consumes the persisted data.
pub use model::*;
