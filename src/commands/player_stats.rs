//! Season summary, advanced metrics, and game log for one player.

use serde_json::{json, Value};

use super::common::{metric, resolve_player};
use crate::{
    cli::types::{PlayerId, Season},
    nba::{
        client::StatsClient,
        compute::{advanced_metrics, season_averages},
        http::headshot_url,
        season::{available_seasons, current_season},
        types::GameLog,
    },
    Result,
};

pub async fn handle_player_stats(
    player_spec: String,
    season: Option<Season>,
    show_logs: bool,
    as_json: bool,
) -> Result<()> {
    let season = season.unwrap_or_else(current_season);
    let client = StatsClient::new()?;
    let player = resolve_player(&client, &player_spec, season).await?;

    let logs = client.game_logs(player.id, season).await;
    if logs.is_empty() {
        println!("No data for {} in the {season} season.", player.full_name);
        if let Some(alt) = season_with_data(&client, player.id, season).await {
            println!("Tip: data is available in the {alt} season (try --season {alt}).");
        }
        return Ok(());
    }

    let summary = season_averages(&logs);
    let advanced = advanced_metrics(&logs);

    if as_json {
        let payload = json!({
            "player_id": player.id,
            "name": player.full_name,
            "season": season,
            "headshot_url": headshot_url(player.id),
            "summary": summary,
            "advanced": advanced,
            "game_logs": if show_logs { json!(logs.records) } else { Value::Null },
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{} — {season} season", player.full_name);
    println!("  Headshot: {}", headshot_url(player.id));
    println!();
    println!("  Games played: {:.0}", metric(&summary, "games_played"));
    println!(
        "  PPG {:>5.1}   RPG {:>5.1}   APG {:>5.1}",
        metric(&summary, "ppg"),
        metric(&summary, "rpg"),
        metric(&summary, "apg"),
    );
    println!(
        "  SPG {:>5.1}   BPG {:>5.1}   MPG {:>5.1}",
        metric(&summary, "spg"),
        metric(&summary, "bpg"),
        metric(&summary, "mpg"),
    );
    println!(
        "  FG% {:.3}   3P% {:.3}   FT% {:.3}",
        metric(&summary, "fg_pct"),
        metric(&summary, "fg3_pct"),
        metric(&summary, "ft_pct"),
    );

    if !advanced.is_empty() {
        println!();
        println!("Advanced:");
        if let Some(v) = advanced.get("true_shooting_pct") {
            println!("  True shooting %: {v:.3}");
        }
        if let Some(v) = advanced.get("effective_fg_pct") {
            println!("  Effective FG %:  {v:.3}");
        }
        if let Some(v) = advanced.get("avg_minutes") {
            println!("  Avg minutes:     {v:.1}");
        }
        if let Some(v) = advanced.get("total_minutes") {
            println!("  Total minutes:   {v:.0}");
        }
        if let Some(v) = advanced.get("pts_std") {
            println!("  Points std dev:  {v:.1}");
        }
        if let Some(v) = advanced.get("pts_variance") {
            println!("  Points variance: {v:.1}");
        }
    }

    if show_logs {
        println!();
        println!("Game log ({} games):", logs.len());
        print_game_log(&logs);
    }
    Ok(())
}

/// Probe the other offered seasons, most recent first, for one with data.
async fn season_with_data(
    client: &StatsClient,
    player_id: PlayerId,
    selected: Season,
) -> Option<Season> {
    for alt in available_seasons().into_iter().rev() {
        if alt == selected {
            continue;
        }
        if !client.game_logs(player_id, alt).await.is_empty() {
            return Some(alt);
        }
    }
    None
}

fn print_game_log(log: &GameLog) {
    println!(
        "{:<12} {:<14} {:>4} {:>4} {:>4} {:>4} {:>4} {:>5} {:>6} {:>6} {:>6}",
        "Date", "Matchup", "PTS", "REB", "AST", "STL", "BLK", "MIN", "FG%", "3P%", "FT%"
    );
    for r in &log.records {
        println!(
            "{:<12} {:<14} {:>4.0} {:>4.0} {:>4.0} {:>4.0} {:>4.0} {:>5.0} {:>6.3} {:>6.3} {:>6.3}",
            r.game_date.to_string(),
            r.matchup,
            r.points,
            r.rebounds,
            r.assists,
            r.steals,
            r.blocks,
            r.minutes,
            r.fg_pct,
            r.fg3_pct,
            r.ft_pct,
        );
    }
}
