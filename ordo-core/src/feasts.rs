//! Feast tables and precedence.
//!
//! Three sources can claim a day: the temporal cycle (movable days anchored
//! on Easter and Christmas), the named Sundays of the strong seasons, and
//! the fixed sanctoral cycle. The highest rank wins the day; a displaced
//! celebration of memorial rank or above is kept as a commemoration.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::computus;
use crate::day::{Color, Feast, Rank, Season};
use crate::season::{advent_start, baptism_of_the_lord, season_for, seasonal_color};

const ORDINALS: [&str; 7] = [
    "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh",
];

/// Movable celebrations of the temporal cycle.
pub fn temporal_feast(date: NaiveDate) -> Option<Feast> {
    let year = date.year();
    let easter = computus::easter(year);

    let movable = [
        (
            computus::ash_wednesday(year),
            Feast::new("Ash Wednesday", Rank::Feast, Color::Violet),
        ),
        (
            computus::palm_sunday(year),
            Feast::new("Palm Sunday of the Passion of the Lord", Rank::Solemnity, Color::Red),
        ),
        (
            easter - Duration::days(3),
            Feast::new("Holy Thursday", Rank::Solemnity, Color::White),
        ),
        (
            computus::good_friday(year),
            Feast::new("Good Friday of the Passion of the Lord", Rank::Solemnity, Color::Red),
        ),
        (
            easter,
            Feast::new("Easter Sunday of the Resurrection", Rank::Solemnity, Color::White),
        ),
        (
            computus::ascension(year),
            Feast::new("Ascension of the Lord", Rank::Solemnity, Color::White),
        ),
        (
            computus::pentecost(year),
            Feast::new("Pentecost Sunday", Rank::Solemnity, Color::Red),
        ),
        (
            computus::trinity_sunday(year),
            Feast::new("Trinity Sunday", Rank::Solemnity, Color::White),
        ),
        (
            computus::corpus_christi(year),
            Feast::new("Corpus Christi", Rank::Solemnity, Color::White),
        ),
        (
            easter + Duration::days(68),
            Feast::new("Sacred Heart of Jesus", Rank::Solemnity, Color::White),
        ),
        (
            advent_start(year) - Duration::days(7),
            Feast::new("Christ the King", Rank::Solemnity, Color::White),
        ),
        (
            baptism_of_the_lord(year),
            Feast::new("Baptism of the Lord", Rank::Feast, Color::White),
        ),
        (
            holy_family(year),
            Feast::new("Holy Family", Rank::Feast, Color::White),
        ),
    ];

    movable
        .into_iter()
        .find(|(d, _)| *d == date)
        .map(|(_, feast)| feast)
}

/// Holy Family: the Sunday within the Christmas octave, or Dec 30 when
/// Christmas itself falls on a Sunday.
fn holy_family(year: i32) -> NaiveDate {
    let mut date = NaiveDate::from_ymd_opt(year, 12, 26).unwrap();
    let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();
    while date <= end {
        if date.weekday() == Weekday::Sun {
            return date;
        }
        date += Duration::days(1);
    }
    NaiveDate::from_ymd_opt(year, 12, 30).unwrap()
}

/// Named Sundays of Advent, Lent and Eastertide.
///
/// Ranked as feasts so that memorials never displace them; solemnities
/// (which the temporal table already carries) still do.
pub fn sunday_celebration(date: NaiveDate) -> Option<Feast> {
    if date.weekday() != Weekday::Sun {
        return None;
    }
    let year = date.year();
    let color = seasonal_color(date);

    match season_for(date) {
        Season::Advent => {
            let nth = (date - advent_start(year)).num_days() / 7;
            let ordinal = ORDINALS.get(nth as usize)?;
            Some(Feast::new(&format!("{ordinal} Sunday of Advent"), Rank::Feast, color))
        }
        Season::Lent => {
            let first_sunday = computus::easter(year) - Duration::days(42);
            if date < first_sunday {
                return None;
            }
            let nth = (date - first_sunday).num_days() / 7;
            // Palm Sunday belongs to the temporal table
            if nth >= 5 {
                return None;
            }
            let ordinal = ORDINALS.get(nth as usize)?;
            Some(Feast::new(&format!("{ordinal} Sunday of Lent"), Rank::Feast, color))
        }
        Season::Easter => {
            let nth = (date - computus::easter(year)).num_days() / 7;
            // Easter Sunday and Pentecost belong to the temporal table
            if nth == 0 || nth >= 7 {
                return None;
            }
            let ordinal = ORDINALS.get(nth as usize)?;
            Some(Feast::new(&format!("{ordinal} Sunday of Easter"), Rank::Feast, color))
        }
        Season::Christmas | Season::Ordinary => None,
    }
}

/// Fixed sanctoral cycle, keyed on (month, day).
pub fn sanctoral_feast(date: NaiveDate) -> Option<Feast> {
    use Color::*;
    use Rank::*;

    let (name, rank, color) = match (date.month(), date.day()) {
        (1, 1) => ("Mary, Mother of God", Solemnity, White),
        (1, 6) => ("Epiphany of the Lord", Solemnity, White),
        (1, 17) => ("St. Anthony, Abbot", Memorial, White),
        (1, 21) => ("St. Agnes, Virgin and Martyr", Memorial, Red),
        (1, 25) => ("Conversion of St. Paul", Feast, White),
        (1, 28) => ("St. Thomas Aquinas", Memorial, White),
        (2, 2) => ("Presentation of the Lord", Feast, White),
        (2, 14) => ("Sts. Cyril and Methodius", Memorial, White),
        (2, 22) => ("Chair of St. Peter", Feast, White),
        (3, 19) => ("St. Joseph, Spouse of the Blessed Virgin Mary", Solemnity, White),
        (3, 25) => ("Annunciation of the Lord", Solemnity, White),
        (4, 25) => ("St. Mark, Evangelist", Feast, Red),
        (4, 29) => ("St. Catherine of Siena", Memorial, White),
        (5, 3) => ("Sts. Philip and James, Apostles", Feast, Red),
        (5, 26) => ("St. Philip Neri", Memorial, White),
        (5, 31) => ("Visitation of the Blessed Virgin Mary", Feast, White),
        (6, 24) => ("Nativity of St. John the Baptist", Solemnity, White),
        (6, 29) => ("Sts. Peter and Paul, Apostles", Solemnity, Red),
        (7, 3) => ("St. Thomas, Apostle", Feast, Red),
        (7, 11) => ("St. Benedict, Abbot", Memorial, White),
        (7, 22) => ("St. Mary Magdalene", Feast, White),
        (7, 25) => ("St. James, Apostle", Feast, Red),
        (8, 6) => ("Transfiguration of the Lord", Feast, White),
        (8, 8) => ("St. Dominic", Memorial, White),
        (8, 10) => ("St. Lawrence, Deacon and Martyr", Feast, Red),
        (8, 15) => ("Assumption of the Blessed Virgin Mary", Solemnity, White),
        (8, 28) => ("St. Augustine", Memorial, White),
        (9, 14) => ("Exaltation of the Holy Cross", Feast, Red),
        (9, 21) => ("St. Matthew, Apostle and Evangelist", Feast, Red),
        (9, 29) => ("Sts. Michael, Gabriel and Raphael, Archangels", Feast, White),
        (10, 1) => ("St. Therese of the Child Jesus", Memorial, White),
        (10, 2) => ("Guardian Angels", Memorial, White),
        (10, 4) => ("St. Francis of Assisi", Memorial, White),
        (10, 18) => ("St. Luke, Evangelist", Feast, Red),
        (10, 28) => ("Sts. Simon and Jude, Apostles", Feast, Red),
        (11, 1) => ("All Saints", Solemnity, White),
        (11, 2) => ("Commemoration of All the Faithful Departed", Feast, Black),
        (11, 11) => ("St. Martin of Tours", Memorial, White),
        (11, 30) => ("St. Andrew, Apostle", Feast, Red),
        (12, 3) => ("St. Francis Xavier", Memorial, White),
        (12, 6) => ("St. Nicholas", OptionalMemorial, White),
        (12, 7) => ("St. Ambrose", Memorial, White),
        (12, 8) => ("Immaculate Conception of the Blessed Virgin Mary", Solemnity, White),
        (12, 13) => ("St. Lucy, Virgin and Martyr", Memorial, Red),
        (12, 25) => ("Nativity of the Lord", Solemnity, White),
        (12, 26) => ("St. Stephen, the First Martyr", Feast, Red),
        (12, 27) => ("St. John, Apostle and Evangelist", Feast, White),
        (12, 28) => ("Holy Innocents, Martyrs", Feast, Red),
        _ => return None,
    };

    // `Feast` here would resolve to the glob-imported Rank variant
    Some(crate::day::Feast::new(name, rank, color))
}

/// Resolve the celebration of a day.
///
/// Returns the winning feast (if any) and the names of displaced
/// celebrations of memorial rank or above.
pub fn resolve(date: NaiveDate) -> (Option<Feast>, Vec<String>) {
    let mut candidates: Vec<Feast> = Vec::new();
    if let Some(feast) = temporal_feast(date) {
        candidates.push(feast);
    }
    if let Some(feast) = sunday_celebration(date) {
        candidates.push(feast);
    }
    if let Some(feast) = sanctoral_feast(date) {
        candidates.push(feast);
    }

    if candidates.is_empty() {
        return (None, Vec::new());
    }

    // Stable max-by keeps earlier (temporal-first) candidates on rank ties
    let winner_idx = candidates
        .iter()
        .enumerate()
        .max_by(|(ai, a), (bi, b)| a.rank.cmp(&b.rank).then(bi.cmp(ai)))
        .map(|(i, _)| i)
        .unwrap_or(0);

    let winner = candidates[winner_idx].clone();
    let commemorations = candidates
        .into_iter()
        .enumerate()
        .filter(|(i, feast)| *i != winner_idx && feast.rank >= Rank::Memorial)
        .map(|(_, feast)| feast.name)
        .collect();

    (Some(winner), commemorations)
}
