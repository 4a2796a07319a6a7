//! Raw calls against the NBA stats API.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER, USER_AGENT};
use reqwest::Client;

use crate::cli::types::{GameId, PlayerId, Season};
use crate::nba::types::StatsResponse;
use crate::Result;

/// Base path for the NBA stats API.
pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// CDN pattern for player headshot images.
pub fn headshot_url(player_id: PlayerId) -> String {
    format!("https://cdn.nba.com/headshots/nba/latest/1040x760/{player_id}.png")
}

/// The stats API rejects requests that don't look like a browser.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/124.0 Safari/537.36",
        ),
    );
    headers.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    headers.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    headers
}

/// `playergamelog`: one row per game a player appeared in.
pub async fn get_player_game_log(
    client: &Client,
    player_id: PlayerId,
    season: Season,
) -> Result<StatsResponse> {
    let url = format!("{STATS_BASE_URL}/playergamelog");
    let params = [
        ("PlayerID", player_id.to_string()),
        ("Season", season.api_param()),
        ("SeasonType", "Regular Season".to_string()),
    ];

    let res = client
        .get(&url)
        .query(&params)
        .send()
        .await?
        .error_for_status()?
        .json::<StatsResponse>()
        .await?;

    Ok(res)
}

/// `boxscoretraditionalv2`: player rows then team rows for one game.
/// The range parameters are required by the endpoint; these values mean
/// "the whole game".
pub async fn get_box_score(client: &Client, game_id: &GameId) -> Result<StatsResponse> {
    let url = format!("{STATS_BASE_URL}/boxscoretraditionalv2");
    let params = [
        ("GameID", game_id.as_str()),
        ("StartPeriod", "0"),
        ("EndPeriod", "10"),
        ("StartRange", "0"),
        ("EndRange", "28800"),
        ("RangeType", "0"),
    ];

    let res = client
        .get(&url)
        .query(&params)
        .send()
        .await?
        .error_for_status()?
        .json::<StatsResponse>()
        .await?;

    Ok(res)
}

/// `commonallplayers`: the active roster for a season.
pub async fn get_active_players(client: &Client, season: Season) -> Result<StatsResponse> {
    let url = format!("{STATS_BASE_URL}/commonallplayers");
    let params = [
        ("LeagueID", "00".to_string()),
        ("Season", season.api_param()),
        ("IsOnlyCurrentSeason", "1".to_string()),
    ];

    let res = client
        .get(&url)
        .query(&params)
        .send()
        .await?
        .error_for_status()?
        .json::<StatsResponse>()
        .await?;

    Ok(res)
}
