//! Types describing a single liturgical day.
//!
//! These are the wire types served by ordo-server and the payload stored
//! in the calendar cache, so every change here is a cache-format change.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::OrdoError;

/// A liturgical season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Advent,
    Christmas,
    Lent,
    Easter,
    Ordinary,
}

impl Season {
    /// Canonical display name, as served by the season endpoint.
    pub fn name(&self) -> &'static str {
        match self {
            Season::Advent => "Advent",
            Season::Christmas => "Christmas",
            Season::Lent => "Lent",
            Season::Easter => "Easter",
            Season::Ordinary => "Ordinary",
        }
    }

    /// Parse a season from a URL path segment (case-insensitive).
    pub fn parse(s: &str) -> Result<Season, OrdoError> {
        match s.to_ascii_lowercase().as_str() {
            "advent" => Ok(Season::Advent),
            "christmas" => Ok(Season::Christmas),
            "lent" => Ok(Season::Lent),
            "easter" => Ok(Season::Easter),
            "ordinary" => Ok(Season::Ordinary),
            _ => Err(OrdoError::UnknownSeason(s.to_string())),
        }
    }
}

/// Liturgical color for a day or feast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Green,
    Violet,
    White,
    Red,
    Rose,
    Black,
}

impl Color {
    pub fn name(&self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Violet => "violet",
            Color::White => "white",
            Color::Red => "red",
            Color::Rose => "rose",
            Color::Black => "black",
        }
    }
}

/// Rank of a liturgical celebration, ordered by precedence.
///
/// When two celebrations fall on the same day the higher rank wins and
/// the lower one is kept as a commemoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Feria,
    OptionalMemorial,
    Memorial,
    Feast,
    Solemnity,
}

impl Rank {
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Feria => "Feria",
            Rank::OptionalMemorial => "Optional Memorial",
            Rank::Memorial => "Memorial",
            Rank::Feast => "Feast",
            Rank::Solemnity => "Solemnity",
        }
    }
}

/// A named celebration before it is placed on the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feast {
    pub name: String,
    pub rank: Rank,
    pub color: Color,
}

impl Feast {
    pub fn new(name: &str, rank: Rank, color: Color) -> Feast {
        Feast {
            name: name.to_string(),
            rank,
            color,
        }
    }
}

/// Full ordo data for one civil-calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdoDay {
    pub date: NaiveDate,
    pub liturgical_season: Season,
    pub liturgical_color: Color,
    /// None on ferias with no celebration.
    pub feast_name: Option<String>,
    pub feast_rank: Option<Rank>,
    /// Lower-ranked celebrations displaced by the day's feast.
    pub commemorations: Vec<String>,
    pub notes: Option<String>,
}
