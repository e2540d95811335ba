//! Reactive state contexts

pub mod gate;
pub mod notifications;
pub mod party;
