//! Core utilities shared across the crate.

pub mod cache;

pub use cache::{Clock, SystemClock, TtlCache};
