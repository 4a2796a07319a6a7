//! Command implementations for the NBA stats CLI.

pub mod box_score;
pub mod common;
pub mod compare;
pub mod player_stats;
pub mod players;
pub mod seasons;

pub use box_score::handle_box_score;
pub use compare::handle_compare;
pub use player_stats::handle_player_stats;
pub use players::handle_players;
pub use seasons::handle_seasons;
