//! Move engine implementations bundled with the crate.

pub mod scripted;
