//! Type-safe wrappers for NBA stats identifiers.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for NBA player IDs.
///
/// # Examples
///
/// ```rust
/// use nba_stats::PlayerId;
///
/// let id = PlayerId::new(2544);
/// assert_eq!(id.as_u64(), 2544);
/// assert_eq!(id.to_string(), "2544");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for game IDs as reported by the stats API
/// (e.g. "0022300061"). Kept as a string: leading zeros are significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub String);

impl GameId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameId {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(StatsError::EmptyGameId);
        }
        Ok(Self(s.to_string()))
    }
}

/// A competitive season, labeled by the calendar year it starts in.
///
/// # Examples
///
/// ```rust
/// use nba_stats::Season;
///
/// let season = Season::new(2023);
/// assert_eq!(season.to_string(), "2023");
/// assert_eq!(season.api_param(), "2023-24");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// The `YYYY-YY` form the stats API expects for its `Season` parameter.
    pub fn api_param(&self) -> String {
        format!("{}-{:02}", self.0, (self.0 + 1) % 100)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}
