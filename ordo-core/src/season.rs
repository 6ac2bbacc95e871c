//! Liturgical season boundaries and seasonal colors.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::computus;
use crate::day::{Color, Season};

/// First Sunday of Advent: the fourth Sunday before Christmas
/// (always falls between Nov 27 and Dec 3).
pub fn advent_start(year: i32) -> NaiveDate {
    let christmas = NaiveDate::from_ymd_opt(year, 12, 25).unwrap();
    let days_back = match christmas.weekday().num_days_from_sunday() {
        0 => 7, // Christmas on a Sunday: previous Sunday is Dec 18
        n => i64::from(n),
    };
    christmas - Duration::days(days_back) - Duration::days(21)
}

/// Baptism of the Lord, closing the Christmas season.
///
/// Normally the Sunday after Epiphany (Jan 6). When that Sunday already
/// falls on Jan 7 or Jan 8 it carries the Epiphany celebration, and the
/// Baptism moves to the following Monday (Jan 8 or Jan 9).
pub fn baptism_of_the_lord(year: i32) -> NaiveDate {
    let mut date = NaiveDate::from_ymd_opt(year, 1, 7).unwrap();
    while date.weekday() != Weekday::Sun {
        date += Duration::days(1);
    }
    if date.day() <= 8 {
        date += Duration::days(1);
    }
    date
}

/// The liturgical season a given date falls in.
pub fn season_for(date: NaiveDate) -> Season {
    let year = date.year();

    let christmas_eve = NaiveDate::from_ymd_opt(year, 12, 24).unwrap();
    if date >= advent_start(year) && date <= christmas_eve {
        return Season::Advent;
    }
    if date.month() == 12 && date.day() >= 25 {
        return Season::Christmas;
    }
    if date <= baptism_of_the_lord(year) {
        return Season::Christmas;
    }

    let easter = computus::easter(year);
    if date >= computus::ash_wednesday(year) && date < easter {
        return Season::Lent;
    }
    if date >= easter && date <= computus::pentecost(year) {
        return Season::Easter;
    }

    Season::Ordinary
}

/// Default color for a date, before any feast overrides it.
///
/// Gaudete (3rd Sunday of Advent) and Laetare (4th Sunday of Lent) are
/// the two rose days of the year.
pub fn seasonal_color(date: NaiveDate) -> Color {
    let year = date.year();
    match season_for(date) {
        Season::Advent => {
            if date == advent_start(year) + Duration::days(14) {
                Color::Rose
            } else {
                Color::Violet
            }
        }
        Season::Lent => {
            if date == computus::easter(year) - Duration::days(21) {
                Color::Rose
            } else {
                Color::Violet
            }
        }
        Season::Christmas | Season::Easter => Color::White,
        Season::Ordinary => Color::Green,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_advent_start_known_years() {
        assert_eq!(advent_start(2023), ymd(2023, 12, 3));
        assert_eq!(advent_start(2024), ymd(2024, 12, 1));
        assert_eq!(advent_start(2025), ymd(2025, 11, 30));
    }

    #[test]
    fn test_advent_start_range() {
        for year in 1900..=2100 {
            let start = advent_start(year);
            assert_eq!(start.weekday(), Weekday::Sun, "year {year}");
            let lower = ymd(year, 11, 27);
            let upper = ymd(year, 12, 3);
            assert!(start >= lower && start <= upper, "year {year}: {start}");
        }
    }

    #[test]
    fn test_christmas_season_spans_new_year() {
        assert_eq!(season_for(ymd(2024, 12, 25)), Season::Christmas);
        assert_eq!(season_for(ymd(2024, 12, 31)), Season::Christmas);
        assert_eq!(season_for(ymd(2025, 1, 1)), Season::Christmas);
        // Baptism of the Lord 2025 is Jan 12
        assert_eq!(baptism_of_the_lord(2025), ymd(2025, 1, 12));
        assert_eq!(season_for(ymd(2025, 1, 12)), Season::Christmas);
        assert_eq!(season_for(ymd(2025, 1, 13)), Season::Ordinary);
    }

    #[test]
    fn test_baptism_moves_to_monday_around_a_weekend_epiphany() {
        // Jan 6 2024 is a Saturday: Sunday Jan 7 keeps Epiphany,
        // Baptism moves to Monday Jan 8
        assert_eq!(baptism_of_the_lord(2024), ymd(2024, 1, 8));
        assert_eq!(season_for(ymd(2024, 1, 8)), Season::Christmas);
        assert_eq!(season_for(ymd(2024, 1, 9)), Season::Ordinary);

        // Jan 8 2023 is a Sunday: Baptism moves to Monday Jan 9
        assert_eq!(baptism_of_the_lord(2023), ymd(2023, 1, 9));

        // Jan 6 2030 is itself a Sunday: the next Sunday Jan 13 stands
        assert_eq!(baptism_of_the_lord(2030), ymd(2030, 1, 13));
    }

    #[test]
    fn test_lent_and_easter_boundaries_2024() {
        assert_eq!(season_for(ymd(2024, 2, 13)), Season::Ordinary);
        assert_eq!(season_for(ymd(2024, 2, 14)), Season::Lent); // Ash Wednesday
        assert_eq!(season_for(ymd(2024, 3, 30)), Season::Lent); // Holy Saturday
        assert_eq!(season_for(ymd(2024, 3, 31)), Season::Easter); // Easter Sunday
        assert_eq!(season_for(ymd(2024, 5, 19)), Season::Easter); // Pentecost
        assert_eq!(season_for(ymd(2024, 5, 20)), Season::Ordinary);
    }

    #[test]
    fn test_rose_sundays() {
        // Gaudete 2024: Dec 15; Laetare 2024: Mar 10
        assert_eq!(seasonal_color(ymd(2024, 12, 15)), Color::Rose);
        assert_eq!(seasonal_color(ymd(2024, 3, 10)), Color::Rose);
        assert_eq!(seasonal_color(ymd(2024, 12, 8)), Color::Violet);
        assert_eq!(seasonal_color(ymd(2024, 7, 2)), Color::Green);
    }
}
