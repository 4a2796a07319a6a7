//! Season label resolution from the wall clock.

use chrono::{Datelike, Local, NaiveDate};

use crate::cli::types::Season;

/// How many recent seasons are offered for selection.
pub const SEASON_WINDOW: u16 = 5;

/// The season in progress (or most recently completed) today.
pub fn current_season() -> Season {
    current_season_on(Local::now().date_naive())
}

/// Season label for an arbitrary date. A season starts in October, so
/// before October the league year is still the previous calendar year.
pub fn current_season_on(date: NaiveDate) -> Season {
    let year = date.year() as u16;
    if date.month() < 10 {
        Season::new(year - 1)
    } else {
        Season::new(year)
    }
}

/// The five most recent seasons ending at the current one, ascending.
/// Display order is the caller's concern.
pub fn available_seasons() -> Vec<Season> {
    seasons_ending_at(current_season())
}

pub(crate) fn seasons_ending_at(last: Season) -> Vec<Season> {
    let last = last.as_u16();
    (last + 1 - SEASON_WINDOW..=last).map(Season::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn before_october_is_previous_year() {
        assert_eq!(current_season_on(date(2024, 3, 15)), Season::new(2023));
        assert_eq!(current_season_on(date(2024, 9, 30)), Season::new(2023));
    }

    #[test]
    fn october_onward_is_current_year() {
        assert_eq!(current_season_on(date(2024, 10, 1)), Season::new(2024));
        assert_eq!(current_season_on(date(2024, 11, 20)), Season::new(2024));
        assert_eq!(current_season_on(date(2024, 12, 31)), Season::new(2024));
    }

    #[test]
    fn window_is_five_consecutive_seasons_ascending() {
        let seasons = seasons_ending_at(Season::new(2024));
        assert_eq!(
            seasons,
            vec![
                Season::new(2020),
                Season::new(2021),
                Season::new(2022),
                Season::new(2023),
                Season::new(2024),
            ]
        );
    }

    #[test]
    fn window_ends_at_current_season() {
        let seasons = available_seasons();
        assert_eq!(seasons.len(), SEASON_WINDOW as usize);
        assert_eq!(*seasons.last().unwrap(), current_season());
        for pair in seasons.windows(2) {
            assert_eq!(pair[1].as_u16(), pair[0].as_u16() + 1);
        }
    }
}
