//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nba_stats::{
    cli::{Commands, NbaStats},
    commands::{
        handle_box_score, handle_compare, handle_player_stats, handle_players, handle_seasons,
    },
    Result,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let app = NbaStats::parse();
    match app.command {
        Commands::Seasons { json } => handle_seasons(json)?,

        Commands::Players { name, season, json } => handle_players(name, season, json).await?,

        Commands::PlayerStats {
            player,
            season,
            logs,
            json,
        } => handle_player_stats(player, season, logs, json).await?,

        Commands::BoxScore { game_id, json } => handle_box_score(game_id, json).await?,

        Commands::Compare {
            player,
            season,
            json,
        } => handle_compare(player, season, json).await?,
    }

    Ok(())
}
