use anyhow::Result;
use chrono::{Datelike, Utc};
use owo_colors::OwoColorize;

use ordo_core::cache::CalendarCache;
use ordo_core::config::OrdoConfig;

use super::create_spinner;

pub fn run(
    from_year: Option<i32>,
    to_year: Option<i32>,
    rite: Option<String>,
    locale: Option<String>,
) -> Result<()> {
    let config = OrdoConfig::load()?;
    let cache = CalendarCache::new(config.cache_base_dir()?);

    let current = Utc::now().year();
    let from = from_year.unwrap_or(current - config.warmup_years_back);
    let to = to_year.unwrap_or(current + config.warmup_years_ahead);
    if from > to {
        anyhow::bail!("--from-year {from} is after --to-year {to}");
    }

    let rite = rite.unwrap_or_else(|| config.rite.clone());
    let locale = locale.unwrap_or_else(|| config.locale.clone());

    let mut failures = 0;
    for year in from..=to {
        let spinner = create_spinner(format!("Building {year} ({rite}/{locale})"));
        let result = cache.get_or_build(year, &rite, &locale);
        spinner.finish_and_clear();

        match result {
            Ok(days) => println!("{} {year}: {} days cached", "✓".green(), days.len()),
            Err(e) => {
                failures += 1;
                println!("{} {year}: {}", "✗".red(), e.to_string().red());
            }
        }
    }

    println!();
    println!("Cache directory: {}", cache.version_dir().display());

    if failures > 0 {
        anyhow::bail!("{failures} year(s) failed to build");
    }
    Ok(())
}
