//! NBA Stats CLI Library
//!
//! Fetches per-game logs, box scores, and the active roster from the NBA
//! stats API, normalizes them defensively, and derives season aggregates
//! for display.
//!
//! ## Features
//!
//! - **Game log retrieval**: per-game stats for a player and season,
//!   normalized (dates parsed, rows sorted, malformed cells zeroed)
//! - **Season aggregates**: games played plus per-game averages
//! - **Advanced metrics**: scoring variance and simplified efficiency
//!   measures, keyed only by the columns the source actually carried
//! - **Box scores**: player- and team-level tables for one game
//! - **Player comparison**: season averages across players, side by side
//! - **TTL caching**: repeated calls within the entry lifetime return the
//!   prior normalized result unchanged
//!
//! Every fetch is fail-soft: failures are logged and surface as empty
//! results, never as errors to downstream consumers.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_stats::{PlayerId, Season, StatsClient};
//!
//! # async fn example() -> nba_stats::Result<()> {
//! let client = StatsClient::new()?;
//! let stats = client.season_stats(PlayerId::new(2544), Season::new(2023)).await;
//! println!("PPG: {:.1}", stats.get("ppg").copied().unwrap_or(0.0));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod nba;

// Re-export commonly used types
pub use cli::types::{GameId, PlayerId, Season};
pub use error::{Result, StatsError};
pub use nba::client::StatsClient;
pub use nba::season::{available_seasons, current_season};
