//! Computus: Easter and the movable days derived from it.

use chrono::{Duration, NaiveDate};

/// Gregorian Easter Sunday for a year (anonymous Gregorian algorithm).
pub fn easter(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    // The algorithm only yields March (3) or April (4); yearly inputs are
    // already range-checked by the calendar layer.
    NaiveDate::from_ymd_opt(year, month as u32, day as u32).unwrap()
}

/// Ash Wednesday, 46 days before Easter.
pub fn ash_wednesday(year: i32) -> NaiveDate {
    easter(year) - Duration::days(46)
}

/// Palm Sunday, one week before Easter.
pub fn palm_sunday(year: i32) -> NaiveDate {
    easter(year) - Duration::days(7)
}

/// Good Friday.
pub fn good_friday(year: i32) -> NaiveDate {
    easter(year) - Duration::days(2)
}

/// Ascension Thursday, 39 days after Easter.
pub fn ascension(year: i32) -> NaiveDate {
    easter(year) + Duration::days(39)
}

/// Pentecost Sunday, 49 days after Easter.
pub fn pentecost(year: i32) -> NaiveDate {
    easter(year) + Duration::days(49)
}

/// Trinity Sunday, the Sunday after Pentecost.
pub fn trinity_sunday(year: i32) -> NaiveDate {
    easter(year) + Duration::days(56)
}

/// Corpus Christi, the Thursday after Trinity Sunday.
pub fn corpus_christi(year: i32) -> NaiveDate {
    easter(year) + Duration::days(60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_known_easter_dates() {
        let known = [
            (2000, 4, 23),
            (2023, 4, 9),
            (2024, 3, 31),
            (2025, 4, 20),
            (2026, 4, 5),
            (1943, 4, 25), // latest possible Easter
            (2008, 3, 23),
        ];
        for (year, month, day) in known {
            assert_eq!(
                easter(year),
                NaiveDate::from_ymd_opt(year, month, day).unwrap(),
                "Easter {year}"
            );
        }
    }

    #[test]
    fn test_easter_is_always_a_march_or_april_sunday() {
        for year in 1900..=2100 {
            let date = easter(year);
            assert_eq!(date.weekday(), chrono::Weekday::Sun, "year {year}");
            let lower = NaiveDate::from_ymd_opt(year, 3, 22).unwrap();
            let upper = NaiveDate::from_ymd_opt(year, 4, 25).unwrap();
            assert!(date >= lower && date <= upper, "year {year}: {date}");
        }
    }

    #[test]
    fn test_movable_days_2024() {
        assert_eq!(ash_wednesday(2024), NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());
        assert_eq!(palm_sunday(2024), NaiveDate::from_ymd_opt(2024, 3, 24).unwrap());
        assert_eq!(good_friday(2024), NaiveDate::from_ymd_opt(2024, 3, 29).unwrap());
        assert_eq!(ascension(2024), NaiveDate::from_ymd_opt(2024, 5, 9).unwrap());
        assert_eq!(pentecost(2024), NaiveDate::from_ymd_opt(2024, 5, 19).unwrap());
        assert_eq!(corpus_christi(2024), NaiveDate::from_ymd_opt(2024, 5, 30).unwrap());
    }
}
