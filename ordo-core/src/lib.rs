//! Core types and calendar engine for the ordo ecosystem.
//!
//! This crate provides everything shared by ordo-server and ordo-cli:
//! - `OrdoDay` and related types describing a single liturgical day
//! - `LiturgicalCalendar` for building a full year of ordo data
//! - `CalendarCache` for the two-level (memory + disk) calendar cache
//! - `OrdoConfig` for the user-facing TOML configuration

pub mod cache;
pub mod calendar;
pub mod computus;
pub mod config;
pub mod constants;
pub mod day;
pub mod error;
pub mod feasts;
pub mod season;

// Re-export the common types at crate root for convenience
pub use calendar::LiturgicalCalendar;
pub use day::{Color, OrdoDay, Rank, Season};
pub use error::{OrdoError, OrdoResult};

/// Version of the calendar engine, used to key on-disk cache directories.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
