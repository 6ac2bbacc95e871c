//! Startup cache warmup.

use chrono::{Datelike, Utc};

use crate::state::AppState;

/// Pre-build the configured span of years around the current one.
///
/// A warmup failure is downgraded to a warning: the server starts and
/// serves either way, building calendars on demand.
pub fn run(state: &AppState) {
    let current = Utc::now().year();
    let mut failed = 0;

    for year in state.config.warmup_span(current) {
        match state
            .cache
            .get_or_build(year, &state.config.rite, &state.config.locale)
        {
            Ok(days) => tracing::info!(year, days = days.len(), "warmed up calendar"),
            Err(e) => {
                failed += 1;
                tracing::warn!(year, error = %e, "warmup failed");
            }
        }
    }

    if failed > 0 {
        tracing::warn!(failed, "warmup finished with failures, continuing startup");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordo_core::config::OrdoConfig;

    #[test]
    fn test_warmup_populates_the_configured_span() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::with_cache_dir(dir.path().to_path_buf(), OrdoConfig::default());

        run(&state);

        // Default span is current-1 ..= current+1
        assert_eq!(state.cache.status().total_cached_files, 3);
    }

    #[test]
    fn test_warmup_failure_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let config = OrdoConfig {
            // Reaches past MAX_YEAR so at least one year fails to build
            warmup_years_back: 0,
            warmup_years_ahead: 200,
            ..OrdoConfig::default()
        };
        let state = AppState::with_cache_dir(dir.path().to_path_buf(), config);

        run(&state);

        assert!(state.cache.status().total_cached_files > 0);
    }
}
