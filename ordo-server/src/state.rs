//! Shared application state.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use ordo_core::cache::CalendarCache;
use ordo_core::config::OrdoConfig;

#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<CalendarCache>,
    pub config: Arc<OrdoConfig>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let config = OrdoConfig::load()?;
        let cache = CalendarCache::new(config.cache_base_dir()?);

        Ok(AppState {
            cache: Arc::new(cache),
            config: Arc::new(config),
            started_at: Instant::now(),
        })
    }

    /// State backed by an explicit cache directory and config, used by
    /// route tests to avoid touching the real user cache.
    #[cfg(test)]
    pub fn with_cache_dir(dir: std::path::PathBuf, config: OrdoConfig) -> Self {
        AppState {
            cache: Arc::new(CalendarCache::new(dir)),
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }
}
