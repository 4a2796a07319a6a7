//! End-to-end tests over the public API: decode a stats API payload,
//! normalize it, and derive season aggregates. No network involved.

use nba_stats::nba::compute::{advanced_metrics, comparison_rows, season_averages};
use nba_stats::nba::types::{GameLog, StatsResponse};
use nba_stats::{available_seasons, PlayerId, Season};
use serde_json::json;

fn sample_payload() -> serde_json::Value {
    json!({
        "resource": "playergamelog",
        "parameters": {"PlayerID": 2544, "Season": "2023-24", "SeasonType": "Regular Season"},
        "resultSets": [{
            "name": "PlayerGameLog",
            "headers": [
                "SEASON_ID", "Player_ID", "Game_ID", "GAME_DATE", "MATCHUP", "WL",
                "MIN", "FG_PCT", "FG3_PCT", "FT_PCT", "REB", "AST", "STL", "BLK", "PTS"
            ],
            "rowSet": [
                ["22023", 2544, "0022300121", "NOV 06, 2023", "LAL vs. MIA", "W",
                 35, 0.560, 0.400, 0.800, 8, 9, 1, 1, 30],
                ["22023", 2544, "0022300047", "OCT 26, 2023", "LAL @ PHX", "L",
                 "forfeit", 0.440, 0.250, null, 6, 5, 2, 0, 21],
                ["22023", 2544, "0022300003", "corrupted date", "LAL @ DEN", "L",
                 29, 0.510, 0.333, 1.0, 8, 3, 1, 1, 21]
            ]
        }]
    })
}

fn sample_log() -> GameLog {
    let response: StatsResponse = serde_json::from_value(sample_payload()).unwrap();
    GameLog::from_result_set(&response.result_sets[0])
}

#[test]
fn payload_normalizes_to_sorted_clean_log() {
    let log = sample_log();

    // The corrupted-date row is gone, the rest are oldest-first.
    assert_eq!(log.len(), 2);
    assert_eq!(log.records[0].game_id.as_str(), "0022300047");
    assert_eq!(log.records[1].game_id.as_str(), "0022300121");

    // Malformed minutes and null FT% read as zero, never null.
    assert_eq!(log.records[0].minutes, 0.0);
    assert_eq!(log.records[0].ft_pct, 0.0);
    assert_eq!(log.records[1].minutes, 35.0);
}

#[test]
fn aggregates_follow_display_rounding() {
    let log = sample_log();
    let summary = season_averages(&log);

    assert_eq!(summary["games_played"], 2.0);
    assert_eq!(summary["ppg"], 25.5);
    assert_eq!(summary["rpg"], 7.0);
    // Mean of 0.560 and 0.440, rounded to three places.
    assert_eq!(summary["fg_pct"], 0.5);
    // Null FT% counted as zero: (0.8 + 0.0) / 2.
    assert_eq!(summary["ft_pct"], 0.4);
}

#[test]
fn advanced_metrics_from_same_log() {
    let log = sample_log();
    let advanced = advanced_metrics(&log);

    assert!((advanced["true_shooting_pct"] - 0.5).abs() < 1e-9);
    assert_eq!(advanced["true_shooting_pct"], advanced["effective_fg_pct"]);
    assert!((advanced["avg_minutes"] - 17.5).abs() < 1e-9);
    assert!((advanced["total_minutes"] - 35.0).abs() < 1e-9);
    // Points 30 and 21: sample variance 40.5.
    assert!((advanced["pts_variance"] - 40.5).abs() < 1e-9);
    assert!((advanced["pts_std"] - 40.5_f64.sqrt()).abs() < 1e-9);
}

#[test]
fn comparison_skips_empty_players_and_keeps_order() {
    let season = Season::new(2023);
    let with_data = sample_log();

    let logs = vec![
        (PlayerId::new(1), with_data.clone()),
        (PlayerId::new(2), GameLog::default()),
        (PlayerId::new(3), with_data),
    ];
    let rows = comparison_rows(season, &logs);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].player_id, PlayerId::new(1));
    assert_eq!(rows[1].player_id, PlayerId::new(3));
    assert_eq!(rows[0].stat("ppg"), 25.5);
    // Missing keys read as zero at the display boundary.
    assert_eq!(rows[0].stat("nonexistent"), 0.0);
}

#[test]
fn season_window_is_five_and_ends_at_current() {
    let seasons = available_seasons();
    assert_eq!(seasons.len(), 5);
    assert_eq!(*seasons.last().unwrap(), nba_stats::current_season());
    for pair in seasons.windows(2) {
        assert_eq!(pair[1].as_u16(), pair[0].as_u16() + 1);
    }
}
