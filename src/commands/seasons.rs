//! List the seasons the dashboard offers.

use crate::nba::season::{available_seasons, current_season};
use crate::Result;

pub fn handle_seasons(as_json: bool) -> Result<()> {
    let seasons = available_seasons();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&seasons)?);
        return Ok(());
    }

    let current = current_season();
    for season in seasons.iter().rev() {
        if *season == current {
            println!("{season} (current)");
        } else {
            println!("{season}");
        }
    }
    Ok(())
}
