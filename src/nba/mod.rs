//! NBA stats API access: transport, normalization, and aggregation.

pub mod client;
pub mod compute;
pub mod http;
pub mod season;
pub mod types;

pub use client::StatsClient;
