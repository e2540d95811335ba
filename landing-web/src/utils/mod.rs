//! Utility modules

pub mod constants;
pub mod dom;
pub mod scroll;
