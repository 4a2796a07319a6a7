//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::{GameId, Season};

#[derive(Debug, Parser)]
#[clap(name = "nba-stats", about = "NBA player statistics CLI")]
pub struct NbaStats {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the seasons available for selection, most recent first.
    Seasons {
        /// Output as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List the active roster, optionally filtered by name.
    Players {
        /// Filter by name (substring, case-insensitive).
        #[clap(long, short = 'n')]
        name: Option<String>,

        /// Season year (e.g. 2023). Defaults to the current season.
        #[clap(long, short)]
        season: Option<Season>,

        /// Output as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Season summary, advanced metrics, and game log for one player.
    PlayerStats {
        /// Player display name (e.g. "LeBron James") or numeric id.
        #[clap(long, short)]
        player: String,

        /// Season year (e.g. 2023). Defaults to the current season.
        #[clap(long, short)]
        season: Option<Season>,

        /// Include the full per-game log table.
        #[clap(long)]
        logs: bool,

        /// Output as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Player and team box score tables for one game.
    BoxScore {
        /// Game id as reported in the game log (e.g. 0022300061).
        #[clap(long, short)]
        game_id: GameId,

        /// Output as JSON instead of text tables.
        #[clap(long)]
        json: bool,
    },

    /// Compare several players' season averages side by side.
    Compare {
        /// Player name or id (repeatable): `-p "Stephen Curry" -p 2544`.
        #[clap(long, short, required = true)]
        player: Vec<String>,

        /// Season year (e.g. 2023). Defaults to the current season.
        #[clap(long, short)]
        season: Option<Season>,

        /// Output as JSON instead of a text table.
        #[clap(long)]
        json: bool,
    },
}
