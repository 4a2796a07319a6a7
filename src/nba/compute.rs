//! Season aggregation and derived metrics over normalized game logs.
//!
//! All functions here are pure: they see only a [`GameLog`] and return
//! metric-name → value maps. An empty log always yields an empty map,
//! which is how "no data" stays distinguishable from "all zeros".

use std::collections::BTreeMap;
use tracing::debug;

use crate::cli::types::{PlayerId, Season};
use crate::nba::types::{ComparisonRow, GameLog, StatColumn};


const AVERAGE_KEYS: [(&str, StatColumn); 9] = [
    ("ppg", StatColumn::Points),
    ("rpg", StatColumn::Rebounds),
    ("apg", StatColumn::Assists),
    ("spg", StatColumn::Steals),
    ("bpg", StatColumn::Blocks),
    ("mpg", StatColumn::Minutes),
    ("fg_pct", StatColumn::FgPct),
    ("fg3_pct", StatColumn::Fg3Pct),
    ("ft_pct", StatColumn::FtPct),
];

/// Season averages for one player.
///
/// Empty log ⇒ empty map. Otherwise the map carries `games_played` (the
/// record count) plus the arithmetic mean of every stat column. Values are
/// rounded here and only here: 3 decimals for `*_pct` keys, 1 for the rest.
pub fn season_averages(log: &GameLog) -> BTreeMap<String, f64> {
    let mut stats = BTreeMap::new();
    if log.is_empty() {
        return stats;
    }

    stats.insert("games_played".to_string(), log.len() as f64);
    for (key, column) in AVERAGE_KEYS {
        stats.insert(key.to_string(), mean(log, column));
    }
    for (key, value) in stats.iter_mut() {
        *value = round_metric(key, *value);
    }
    stats
}

/// Secondary metrics, computed only for keys whose source columns exist.
///
/// `true_shooting_pct` and `effective_fg_pct` are both the mean FG%. That
/// is not the real TS%/eFG% formula (those need free-throw attempts and
/// three-point makes, which the game log table does not carry here); the
/// simplification is kept so displayed values match the legacy dashboard.
/// Values are not rounded.
pub fn advanced_metrics(log: &GameLog) -> BTreeMap<String, f64> {
    let mut stats = BTreeMap::new();
    if log.is_empty() {
        return stats;
    }

    if log.has_column(StatColumn::FgPct) && log.has_column(StatColumn::Fg3Pct) {
        let mean_fg = mean(log, StatColumn::FgPct);
        stats.insert("true_shooting_pct".to_string(), mean_fg);
        stats.insert("effective_fg_pct".to_string(), mean_fg);
    }
    if log.has_column(StatColumn::Minutes) {
        stats.insert("avg_minutes".to_string(), mean(log, StatColumn::Minutes));
        stats.insert("total_minutes".to_string(), total(log, StatColumn::Minutes));
    }
    if log.has_column(StatColumn::Points) {
        let variance = sample_variance(log, StatColumn::Points);
        stats.insert("pts_std".to_string(), variance.sqrt());
        stats.insert("pts_variance".to_string(), variance);
    }
    stats
}

/// Build comparison rows from per-player logs, preserving input order.
/// Players whose aggregation comes back empty are dropped, so the output
/// may be shorter than the input.
pub fn comparison_rows(season: Season, logs: &[(PlayerId, GameLog)]) -> Vec<ComparisonRow> {
    let mut rows = Vec::with_capacity(logs.len());
    for (player_id, log) in logs {
        let stats = season_averages(log);
        if stats.is_empty() {
            debug!(%player_id, %season, "no season data, dropped from comparison");
            continue;
        }
        rows.push(ComparisonRow {
            player_id: *player_id,
            season,
            stats,
        });
    }
    rows
}

/// Display-precision rounding: 3 decimals for percentage keys, 1 otherwise.
fn round_metric(key: &str, value: f64) -> f64 {
    if key.ends_with("_pct") {
        (value * 1000.0).round() / 1000.0
    } else {
        (value * 10.0).round() / 10.0
    }
}

fn mean(log: &GameLog, column: StatColumn) -> f64 {
    if log.records.is_empty() {
        return 0.0;
    }
    total(log, column) / log.records.len() as f64
}

fn total(log: &GameLog, column: StatColumn) -> f64 {
    log.records.iter().map(|r| r.stat(column)).sum()
}

/// Sample variance with the n − 1 divisor; 0.0 for fewer than two records.
fn sample_variance(log: &GameLog, column: StatColumn) -> f64 {
    let n = log.records.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(log, column);
    let sum_sq: f64 = log
        .records
        .iter()
        .map(|r| {
            let d = r.stat(column) - m;
            d * d
        })
        .sum();
    sum_sq / (n - 1) as f64
}
