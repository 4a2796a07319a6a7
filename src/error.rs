//! Error types for the NBA stats CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse numeric id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("stats API response is missing result set {index}")]
    MissingResultSet { index: usize },

    #[error("game id must not be empty")]
    EmptyGameId,

    #[error("player not found on the active roster: {name}")]
    PlayerNotFound { name: String },
}
