//! Player and team box score tables for one game.

use super::common::print_table;
use crate::{cli::types::GameId, nba::client::StatsClient, Result};

pub async fn handle_box_score(game_id: GameId, as_json: bool) -> Result<()> {
    let client = StatsClient::new()?;
    let box_score = client.box_score(&game_id).await;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&box_score)?);
        return Ok(());
    }

    if box_score.is_empty() {
        println!("No box score available for game {game_id}.");
        return Ok(());
    }

    println!("Player box score — game {game_id}");
    print_table(&box_score.player_rows);
    println!();
    println!("Team box score");
    print_table(&box_score.team_rows);
    Ok(())
}
