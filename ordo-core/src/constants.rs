//! Shared constants for the ordo ecosystem.

/// Earliest year the engine will build a calendar for.
pub const MIN_YEAR: i32 = 1900;

/// Latest year the engine will build a calendar for.
pub const MAX_YEAR: i32 = 2100;

/// Default rite used when none is configured.
pub const DEFAULT_RITE: &str = "roman";

/// Default locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "la";

/// Default number of past years warmed up at server start.
pub const DEFAULT_WARMUP_YEARS_BACK: i32 = 1;

/// Default number of future years warmed up at server start.
pub const DEFAULT_WARMUP_YEARS_AHEAD: i32 = 1;
