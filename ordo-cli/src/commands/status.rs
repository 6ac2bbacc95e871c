use anyhow::Result;
use owo_colors::OwoColorize;

use ordo_core::cache::CalendarCache;
use ordo_core::config::OrdoConfig;

pub fn run() -> Result<()> {
    let config = OrdoConfig::load()?;
    let cache = CalendarCache::new(config.cache_base_dir()?);
    let status = cache.status();

    println!("Engine version:  {}", status.engine_version);
    println!("Cache directory: {}", status.cache_directory);
    println!();

    if status.cached_files.is_empty() {
        println!("{}", "Cache is empty. Run `ordo warmup` to populate it.".dimmed());
        return Ok(());
    }

    println!("Cached calendars:");
    for file in &status.cached_files {
        let modified = file
            .modified
            .map(|m| m.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "unknown".to_string());
        println!(
            "  {}  {:>8} bytes  {}",
            file.filename.bold(),
            file.size_bytes,
            modified.dimmed()
        );
    }
    println!();
    println!("{} file(s) total", status.total_cached_files);

    Ok(())
}
