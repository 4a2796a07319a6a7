//! Wire envelope and domain types for the NBA stats API.
//!
//! Every stats endpoint answers with the same shape: a list of named result
//! sets, each a header row plus untyped data rows. The normalizers here turn
//! those tables into domain values, treating every cell as potentially
//! absent or malformed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

use crate::cli::types::{GameId, PlayerId, Season};


/// Envelope returned by every stats endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    #[serde(rename = "resultSets", default)]
    pub result_sets: Vec<ResultSet>,
}

/// One named table inside a [`StatsResponse`].
#[derive(Debug, Clone, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Index of a header, case-insensitive. The API is inconsistent about
    /// casing across endpoints.
    pub fn column(&self, header: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(header))
    }
}

/// Per-game stat columns the normalizer coerces to numeric.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum StatColumn {
    Points,
    Rebounds,
    Assists,
    Steals,
    Blocks,
    Minutes,
    FgPct,
    Fg3Pct,
    FtPct,
}

impl StatColumn {
    pub const ALL: [StatColumn; 9] = [
        StatColumn::Points,
        StatColumn::Rebounds,
        StatColumn::Assists,
        StatColumn::Steals,
        StatColumn::Blocks,
        StatColumn::Minutes,
        StatColumn::FgPct,
        StatColumn::Fg3Pct,
        StatColumn::FtPct,
    ];

    /// Header name in the stats API game log table.
    pub fn header(self) -> &'static str {
        match self {
            StatColumn::Points => "PTS",
            StatColumn::Rebounds => "REB",
            StatColumn::Assists => "AST",
            StatColumn::Steals => "STL",
            StatColumn::Blocks => "BLK",
            StatColumn::Minutes => "MIN",
            StatColumn::FgPct => "FG_PCT",
            StatColumn::Fg3Pct => "FG3_PCT",
            StatColumn::FtPct => "FT_PCT",
        }
    }
}

/// One normalized row of a player's game log.
///
/// Stat fields are plain numbers, never null: a cell that failed to parse
/// reads as 0.0, and a column the source omitted reads as 0.0 on every
/// record (see [`GameLog::columns`] for which columns were real).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameLogRecord {
    pub game_id: GameId,
    pub game_date: NaiveDate,
    pub matchup: String,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub minutes: f64,
    pub fg_pct: f64,
    pub fg3_pct: f64,
    pub ft_pct: f64,
}

impl GameLogRecord {
    pub fn stat(&self, column: StatColumn) -> f64 {
        match column {
            StatColumn::Points => self.points,
            StatColumn::Rebounds => self.rebounds,
            StatColumn::Assists => self.assists,
            StatColumn::Steals => self.steals,
            StatColumn::Blocks => self.blocks,
            StatColumn::Minutes => self.minutes,
            StatColumn::FgPct => self.fg_pct,
            StatColumn::Fg3Pct => self.fg3_pct,
            StatColumn::FtPct => self.ft_pct,
        }
    }

    fn stat_mut(&mut self, column: StatColumn) -> &mut f64 {
        match column {
            StatColumn::Points => &mut self.points,
            StatColumn::Rebounds => &mut self.rebounds,
            StatColumn::Assists => &mut self.assists,
            StatColumn::Steals => &mut self.steals,
            StatColumn::Blocks => &mut self.blocks,
            StatColumn::Minutes => &mut self.minutes,
            StatColumn::FgPct => &mut self.fg_pct,
            StatColumn::Fg3Pct => &mut self.fg3_pct,
            StatColumn::FtPct => &mut self.ft_pct,
        }
    }
}

/// A player's normalized game log for one season, sorted ascending by date.
///
/// Emptiness is a valid state, not an error: "player had no games" and
/// "fetch failed" both land here as an empty log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameLog {
    pub records: Vec<GameLogRecord>,
    /// Stat columns the source table actually carried. Advanced metrics use
    /// this to omit keys whose inputs never existed.
    pub columns: BTreeSet<StatColumn>,
}

impl GameLog {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn has_column(&self, column: StatColumn) -> bool {
        self.columns.contains(&column)
    }

    /// Normalize a raw game log table:
    /// rows with unparseable dates are dropped, the rest are sorted
    /// ascending by date, stat cells are coerced to numbers (0.0 on
    /// failure), and a positional game id is synthesized when the source
    /// omits the column.
    pub fn from_result_set(table: &ResultSet) -> Self {
        let date_col = table.column("GAME_DATE");
        let matchup_col = table.column("MATCHUP");
        let id_col = table.column("GAME_ID");
        let columns: BTreeSet<StatColumn> = StatColumn::ALL
            .iter()
            .copied()
            .filter(|c| table.column(c.header()).is_some())
            .collect();

        let mut records = Vec::with_capacity(table.row_set.len());
        for (position, row) in table.row_set.iter().enumerate() {
            let Some(game_date) = date_col
                .and_then(|i| row.get(i))
                .and_then(parse_game_date)
            else {
                continue;
            };

            // Positional fallback ids are not stable across re-fetches.
            let game_id = id_col
                .and_then(|i| row.get(i))
                .and_then(cell_text)
                .map(GameId::new)
                .unwrap_or_else(|| GameId::new(position.to_string()));

            let matchup = matchup_col
                .and_then(|i| row.get(i))
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();

            let mut record = GameLogRecord {
                game_id,
                game_date,
                matchup,
                points: 0.0,
                rebounds: 0.0,
                assists: 0.0,
                steals: 0.0,
                blocks: 0.0,
                minutes: 0.0,
                fg_pct: 0.0,
                fg3_pct: 0.0,
                ft_pct: 0.0,
            };
            for &column in &columns {
                let cell = table.column(column.header()).and_then(|i| row.get(i));
                *record.stat_mut(column) = coerce_stat(cell);
            }
            records.push(record);
        }
        records.sort_by_key(|r| r.game_date);

        GameLog { records, columns }
    }
}

/// One active roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub full_name: String,
}

/// Extract roster entries from the `commonallplayers` table, skipping rows
/// without a usable id or name.
pub fn players_from_result_set(table: &ResultSet) -> Vec<Player> {
    let id_col = table.column("PERSON_ID");
    let name_col = table.column("DISPLAY_FIRST_LAST");

    table
        .row_set
        .iter()
        .filter_map(|row| {
            let id = id_col.and_then(|i| row.get(i)).and_then(Value::as_u64)?;
            let full_name = name_col
                .and_then(|i| row.get(i))
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())?
                .to_string();
            Some(Player {
                id: PlayerId::new(id),
                full_name,
            })
        })
        .collect()
}

/// Headers plus raw rows, kept untyped: the presentation layer decides how
/// to render each cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl StatTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<&ResultSet> for StatTable {
    fn from(table: &ResultSet) -> Self {
        Self {
            headers: table.headers.clone(),
            rows: table.row_set.clone(),
        }
    }
}

/// Player- and team-level tables for one game. Either side may be empty
/// when the source returns fewer than two tables or the fetch failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxScore {
    pub game_id: GameId,
    pub player_rows: StatTable,
    pub team_rows: StatTable,
}

impl BoxScore {
    pub fn is_empty(&self) -> bool {
        self.player_rows.is_empty() && self.team_rows.is_empty()
    }
}

/// One player's season identity joined with its aggregated stats.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub player_id: PlayerId,
    pub season: Season,
    pub stats: BTreeMap<String, f64>,
}

impl ComparisonRow {
    /// Read a metric, treating a missing key as zero.
    pub fn stat(&self, key: &str) -> f64 {
        self.stats.get(key).copied().unwrap_or(0.0)
    }
}

/// Game dates arrive as "APR 12, 2024" from the game log endpoint, but
/// other formats show up in older data.
pub(crate) fn parse_game_date(cell: &Value) -> Option<NaiveDate> {
    let s = cell.as_str()?.trim();
    for format in ["%b %d, %Y", "%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }
    None
}

/// Coerce a stat cell to a number; unparseable or missing values become 0.0.
pub(crate) fn coerce_stat(cell: Option<&Value>) -> f64 {
    match cell {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn cell_text(cell: &Value) -> Option<String> {
    match cell {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
