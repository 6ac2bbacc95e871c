//! Year calendar builder.

use chrono::{Duration, NaiveDate};

use crate::constants::{DEFAULT_LOCALE, DEFAULT_RITE, MAX_YEAR, MIN_YEAR};
use crate::day::{OrdoDay, Rank, Season};
use crate::error::{OrdoError, OrdoResult};
use crate::feasts;
use crate::season;

/// A liturgical calendar for one civil year.
///
/// `rite` and `locale` are carried through to cache keys and day notes;
/// the engine currently computes the general Roman calendar for any
/// combination.
#[derive(Debug, Clone)]
pub struct LiturgicalCalendar {
    pub year: i32,
    pub rite: String,
    pub locale: String,
}

impl LiturgicalCalendar {
    pub fn new(year: i32, rite: &str, locale: &str) -> OrdoResult<LiturgicalCalendar> {
        validate_year(year)?;
        Ok(LiturgicalCalendar {
            year,
            rite: rite.to_string(),
            locale: locale.to_string(),
        })
    }

    /// Calendar with the default rite and locale.
    pub fn for_year(year: i32) -> OrdoResult<LiturgicalCalendar> {
        LiturgicalCalendar::new(year, DEFAULT_RITE, DEFAULT_LOCALE)
    }

    /// Build ordo data for every day of the year, in date order.
    pub fn build(&self) -> Vec<OrdoDay> {
        let mut days = Vec::with_capacity(366);
        let mut date = NaiveDate::from_ymd_opt(self.year, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(self.year, 12, 31).unwrap();

        while date <= end {
            days.push(self.build_day(date));
            date += Duration::days(1);
        }

        days
    }

    fn build_day(&self, date: NaiveDate) -> OrdoDay {
        let liturgical_season = season::season_for(date);
        let (feast, commemorations) = feasts::resolve(date);

        let liturgical_color = feast
            .as_ref()
            .map(|f| f.color)
            .unwrap_or_else(|| season::seasonal_color(date));

        OrdoDay {
            date,
            liturgical_season,
            liturgical_color,
            feast_name: feast.as_ref().map(|f| f.name.clone()),
            feast_rank: feast.as_ref().map(|f| f.rank),
            commemorations,
            notes: None,
        }
    }
}

/// Validate a year against the supported range.
pub fn validate_year(year: i32) -> OrdoResult<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(OrdoError::YearOutOfRange(year, MIN_YEAR, MAX_YEAR));
    }
    Ok(())
}

/// Label of the liturgical year ending in `year` (it begins with Advent
/// of the previous civil year).
pub fn liturgical_year(year: i32) -> String {
    format!("{}-{}", year - 1, year)
}

/// All days ranked Solemnity or Feast in a built year, in date order.
pub fn major_feasts(days: &[OrdoDay]) -> Vec<&OrdoDay> {
    days.iter()
        .filter(|day| matches!(day.feast_rank, Some(r) if r >= Rank::Feast))
        .collect()
}

/// All days of a built year falling in a season.
pub fn season_days(days: &[OrdoDay], season: Season) -> Vec<&OrdoDay> {
    days.iter()
        .filter(|day| day.liturgical_season == season)
        .collect()
}

/// Find a specific date in a built year.
pub fn find_day(days: &[OrdoDay], date: NaiveDate) -> OrdoResult<&OrdoDay> {
    days.iter()
        .find(|day| day.date == date)
        .ok_or(OrdoError::DateNotFound(date))
}

/// English month name, as served by the month endpoint.
pub fn month_name(month: u32) -> OrdoResult<&'static str> {
    let name = match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => return Err(OrdoError::InvalidMonth(month)),
    };
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day::Color;

    #[test]
    fn test_build_covers_the_whole_year_consecutively() {
        let days = LiturgicalCalendar::for_year(2024).unwrap().build();
        assert_eq!(days.len(), 366); // leap year
        for pair in days.windows(2) {
            assert_eq!(pair[1].date, pair[0].date + Duration::days(1));
        }

        let days = LiturgicalCalendar::for_year(2023).unwrap().build();
        assert_eq!(days.len(), 365);
    }

    #[test]
    fn test_year_validation() {
        assert!(LiturgicalCalendar::for_year(1899).is_err());
        assert!(LiturgicalCalendar::for_year(2101).is_err());
        assert!(LiturgicalCalendar::for_year(1900).is_ok());
        assert!(LiturgicalCalendar::for_year(2100).is_ok());
    }

    #[test]
    fn test_christmas_day_payload() {
        let days = LiturgicalCalendar::for_year(2024).unwrap().build();
        let christmas =
            find_day(&days, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()).unwrap();
        assert_eq!(christmas.liturgical_season, Season::Christmas);
        assert_eq!(christmas.liturgical_color, Color::White);
        assert_eq!(christmas.feast_name.as_deref(), Some("Nativity of the Lord"));
        assert_eq!(christmas.feast_rank, Some(Rank::Solemnity));
    }

    #[test]
    fn test_ferias_have_no_feast_but_always_a_color() {
        let days = LiturgicalCalendar::for_year(2024).unwrap().build();
        let feria = find_day(&days, NaiveDate::from_ymd_opt(2024, 7, 17).unwrap()).unwrap();
        assert!(feria.feast_name.is_none());
        assert_eq!(feria.liturgical_color, Color::Green);
    }

    #[test]
    fn test_major_feasts_cover_feast_rank_and_above_in_order() {
        let days = LiturgicalCalendar::for_year(2024).unwrap().build();
        let majors = major_feasts(&days);
        assert!(!majors.is_empty());
        assert!(majors
            .iter()
            .all(|d| matches!(d.feast_rank, Some(r) if r >= Rank::Feast)));
        for pair in majors.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
        // Spot-check anchors of both ranks
        assert!(majors.iter().any(|d| d.feast_name.as_deref() == Some("All Saints")));
        assert!(majors
            .iter()
            .any(|d| d.feast_name.as_deref() == Some("Easter Sunday of the Resurrection")));
        assert!(majors
            .iter()
            .any(|d| d.feast_name.as_deref() == Some("Presentation of the Lord")));
        assert!(majors
            .iter()
            .any(|d| d.feast_name.as_deref() == Some("Transfiguration of the Lord")));
        // Memorials stay out
        assert!(!majors
            .iter()
            .any(|d| d.feast_name.as_deref() == Some("St. Francis of Assisi")));
    }

    #[test]
    fn test_season_days_partition_the_year() {
        let days = LiturgicalCalendar::for_year(2024).unwrap().build();
        let total: usize = [
            Season::Advent,
            Season::Christmas,
            Season::Lent,
            Season::Easter,
            Season::Ordinary,
        ]
        .into_iter()
        .map(|s| season_days(&days, s).len())
        .sum();
        assert_eq!(total, days.len());
    }

    #[test]
    fn test_liturgical_year_label() {
        assert_eq!(liturgical_year(2024), "2023-2024");
    }

    #[test]
    fn test_find_day_missing_date() {
        let days = LiturgicalCalendar::for_year(2024).unwrap().build();
        let other_year = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        assert!(matches!(
            find_day(&days, other_year),
            Err(OrdoError::DateNotFound(_))
        ));
    }
}
