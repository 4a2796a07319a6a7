//! List the active roster.

use crate::{
    cli::types::Season,
    nba::{client::StatsClient, season::current_season},
    Result,
};

pub async fn handle_players(
    name: Option<String>,
    season: Option<Season>,
    as_json: bool,
) -> Result<()> {
    let season = season.unwrap_or_else(current_season);
    let client = StatsClient::new()?;

    let mut players = client.active_players(season).await;
    if let Some(needle) = name {
        let needle = needle.to_lowercase();
        players.retain(|p| p.full_name.to_lowercase().contains(&needle));
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&players)?);
        return Ok(());
    }

    if players.is_empty() {
        println!("No players found for the {season} season.");
        return Ok(());
    }
    for player in &players {
        println!("{:>8}  {}", player.id, player.full_name);
    }
    Ok(())
}
