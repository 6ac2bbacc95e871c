use anyhow::Result;
use owo_colors::OwoColorize;

use ordo_core::cache::CalendarCache;
use ordo_core::config::OrdoConfig;

pub fn run() -> Result<()> {
    let config = OrdoConfig::load()?;
    let cache = CalendarCache::new(config.cache_base_dir()?);

    cache.clear()?;
    println!("{} Cache cleared", "✓".green());

    Ok(())
}
