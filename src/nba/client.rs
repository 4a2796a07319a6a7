//! Cached, fail-soft access to the stats API.
//!
//! Every public fetch on [`StatsClient`] degrades to an empty result on
//! failure: downstream consumers treat "empty" as the uniform
//! not-available signal, whether the cause was a transport error, a
//! malformed response, or an unknown player/season. The underlying cause
//! is logged for operators. The inner `load_*` functions keep the real
//! error so diagnosability isn't lost inside this module.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::cli::types::{GameId, PlayerId, Season};
use crate::core::cache::{Clock, SystemClock, TtlCache};
use crate::error::StatsError;
use crate::nba::types::{BoxScore, ComparisonRow, GameLog, Player, StatTable};
use crate::nba::{compute, http};
use crate::Result;

/// Cache lifetimes mirror how quickly each table goes stale.
const GAME_LOG_TTL: Duration = Duration::from_secs(1800);
const BOX_SCORE_TTL: Duration = Duration::from_secs(1800);
const ROSTER_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GameLogKey {
    player_id: PlayerId,
    season: Season,
}

/// Client for the NBA stats API with one TTL cache per endpoint family.
///
/// All calls run sequentially on the caller's task; there is no internal
/// concurrency. Entries are recomputed on cache expiry, never mutated.
pub struct StatsClient {
    http: Client,
    game_logs: TtlCache<GameLogKey, GameLog>,
    box_scores: TtlCache<GameId, BoxScore>,
    rosters: TtlCache<Season, Vec<Player>>,
}

impl StatsClient {
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .default_headers(http::default_headers())
            .build()?;
        Ok(Self::with_parts(http, Arc::new(SystemClock)))
    }

    /// Test seam: inject the transport and the cache clock.
    pub fn with_parts(http: Client, clock: Arc<dyn Clock>) -> Self {
        Self {
            http,
            game_logs: TtlCache::with_clock(256, GAME_LOG_TTL, clock.clone()),
            box_scores: TtlCache::with_clock(64, BOX_SCORE_TTL, clock.clone()),
            rosters: TtlCache::with_clock(8, ROSTER_TTL, clock),
        }
    }

    /// Fetch and normalize a player's game log for one season.
    ///
    /// Cached for 30 minutes per (player, season); failures collapse to an
    /// empty log (see the module docs). Within the TTL, repeated calls
    /// return value-equal logs.
    pub async fn game_logs(&self, player_id: PlayerId, season: Season) -> GameLog {
        let key = GameLogKey { player_id, season };
        if let Some(log) = self.game_logs.get(&key) {
            debug!(%player_id, %season, "game log cache hit");
            return log;
        }

        let log = match self.load_game_logs(player_id, season).await {
            Ok(log) => log,
            Err(e) => {
                warn!(%player_id, %season, error = %e, "game log fetch failed, treating as empty");
                GameLog::default()
            }
        };
        self.game_logs.put(key, log.clone());
        log
    }

    async fn load_game_logs(&self, player_id: PlayerId, season: Season) -> Result<GameLog> {
        let response = http::get_player_game_log(&self.http, player_id, season).await?;
        let table = response
            .result_sets
            .first()
            .ok_or(StatsError::MissingResultSet { index: 0 })?;
        Ok(GameLog::from_result_set(table))
    }

    /// Season averages for one player; empty map when no data is available.
    pub async fn season_stats(&self, player_id: PlayerId, season: Season) -> BTreeMap<String, f64> {
        compute::season_averages(&self.game_logs(player_id, season).await)
    }

    /// Advanced metrics for one player; empty map when no data is available.
    pub async fn advanced_stats(
        &self,
        player_id: PlayerId,
        season: Season,
    ) -> BTreeMap<String, f64> {
        compute::advanced_metrics(&self.game_logs(player_id, season).await)
    }

    /// Player- and team-level box score tables for one game. Failures and
    /// missing tables yield empty tables, never an error.
    pub async fn box_score(&self, game_id: &GameId) -> BoxScore {
        if let Some(box_score) = self.box_scores.get(game_id) {
            debug!(%game_id, "box score cache hit");
            return box_score;
        }

        let box_score = match self.load_box_score(game_id).await {
            Ok(box_score) => box_score,
            Err(e) => {
                warn!(%game_id, error = %e, "box score fetch failed, treating as empty");
                BoxScore {
                    game_id: game_id.clone(),
                    ..BoxScore::default()
                }
            }
        };
        self.box_scores.put(game_id.clone(), box_score.clone());
        box_score
    }

    async fn load_box_score(&self, game_id: &GameId) -> Result<BoxScore> {
        let response = http::get_box_score(&self.http, game_id).await?;
        let mut sets = response.result_sets.into_iter();
        // Player rows come first, team rows second; tolerate fewer tables.
        let player_rows = sets.next().map(|s| StatTable::from(&s)).unwrap_or_default();
        let team_rows = sets.next().map(|s| StatTable::from(&s)).unwrap_or_default();
        Ok(BoxScore {
            game_id: game_id.clone(),
            player_rows,
            team_rows,
        })
    }

    /// The active roster for a season; empty on failure, cached for an hour.
    pub async fn active_players(&self, season: Season) -> Vec<Player> {
        if let Some(players) = self.rosters.get(&season) {
            debug!(%season, "roster cache hit");
            return players;
        }

        let players = match self.load_active_players(season).await {
            Ok(players) => players,
            Err(e) => {
                warn!(%season, error = %e, "roster fetch failed, treating as empty");
                Vec::new()
            }
        };
        self.rosters.put(season, players.clone());
        players
    }

    async fn load_active_players(&self, season: Season) -> Result<Vec<Player>> {
        let response = http::get_active_players(&self.http, season).await?;
        let table = response
            .result_sets
            .first()
            .ok_or(StatsError::MissingResultSet { index: 0 })?;
        Ok(crate::nba::types::players_from_result_set(table))
    }

    /// Resolve a display name to a roster entry: exact case-insensitive
    /// match first, then unique-enough substring match.
    pub async fn find_player(&self, name: &str, season: Season) -> Result<Player> {
        let needle = name.trim();
        let players = self.active_players(season).await;

        if let Some(player) = players
            .iter()
            .find(|p| p.full_name.eq_ignore_ascii_case(needle))
        {
            return Ok(player.clone());
        }

        let lowered = needle.to_lowercase();
        players
            .into_iter()
            .find(|p| p.full_name.to_lowercase().contains(&lowered))
            .ok_or_else(|| StatsError::PlayerNotFound {
                name: needle.to_string(),
            })
    }

    /// Season stats per player, one remote call at a time, in input order.
    /// Duplicates are not deduplicated; players with no data are dropped,
    /// so the output may be shorter than the input.
    pub async fn compare_players(
        &self,
        player_ids: &[PlayerId],
        season: Season,
    ) -> Vec<ComparisonRow> {
        let mut logs = Vec::with_capacity(player_ids.len());
        for &player_id in player_ids {
            logs.push((player_id, self.game_logs(player_id, season).await));
        }
        compute::comparison_rows(season, &logs)
    }
}
