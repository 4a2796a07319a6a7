//! Side-by-side season comparison across players.

use std::collections::HashMap;
use tracing::warn;

use super::common::resolve_player;
use crate::{
    cli::types::{PlayerId, Season},
    nba::{client::StatsClient, season::current_season},
    Result,
};

pub async fn handle_compare(
    player_specs: Vec<String>,
    season: Option<Season>,
    as_json: bool,
) -> Result<()> {
    let season = season.unwrap_or_else(current_season);
    let client = StatsClient::new()?;

    // A typo in one name shouldn't abort the whole comparison.
    let mut ids: Vec<PlayerId> = Vec::with_capacity(player_specs.len());
    let mut names: HashMap<PlayerId, String> = HashMap::new();
    for spec in &player_specs {
        match resolve_player(&client, spec, season).await {
            Ok(player) => {
                names.insert(player.id, player.full_name.clone());
                ids.push(player.id);
            }
            Err(e) => warn!(player = %spec, error = %e, "skipping unresolvable player"),
        }
    }

    let rows = client.compare_players(&ids, season).await;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No season data for the requested players in {season}.");
        return Ok(());
    }

    println!(
        "{:<24} {:>4} {:>6} {:>6} {:>6} {:>6} {:>7}",
        "Player", "GP", "PPG", "RPG", "APG", "MPG", "FG%"
    );
    for row in &rows {
        let name = names
            .get(&row.player_id)
            .cloned()
            .unwrap_or_else(|| row.player_id.to_string());
        println!(
            "{:<24} {:>4.0} {:>6.1} {:>6.1} {:>6.1} {:>6.1} {:>7.3}",
            name,
            row.stat("games_played"),
            row.stat("ppg"),
            row.stat("rpg"),
            row.stat("apg"),
            row.stat("mpg"),
            row.stat("fg_pct"),
        );
    }
    Ok(())
}
