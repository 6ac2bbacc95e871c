//! Two-level calendar cache: in-memory map plus versioned JSON files.
//!
//! On-disk layout is `<base>/v_<engine version>/<year>_<rite>_<locale>.json`.
//! Versioning the directory means an engine upgrade never serves stale
//! calendars; directories for older versions are removed after the first
//! successful build on the new version.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::ENGINE_VERSION;
use crate::calendar::LiturgicalCalendar;
use crate::day::OrdoDay;
use crate::error::{OrdoError, OrdoResult};

/// Metadata of one cache file on disk.
#[derive(Debug, Clone, Serialize)]
pub struct CacheFileInfo {
    pub filename: String,
    pub size_bytes: u64,
    pub modified: Option<DateTime<Utc>>,
}

/// Snapshot of the cache state, served by the cache status endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatus {
    pub engine_version: String,
    pub cache_directory: String,
    pub in_memory_keys: Vec<String>,
    pub cached_files: Vec<CacheFileInfo>,
    pub total_cached_files: usize,
}

/// Calendar cache shared between handlers.
pub struct CalendarCache {
    base_dir: PathBuf,
    memory: RwLock<HashMap<String, Arc<Vec<OrdoDay>>>>,
}

fn cache_key(year: i32, rite: &str, locale: &str) -> String {
    format!("{year}_{rite}_{locale}")
}

impl CalendarCache {
    pub fn new(base_dir: PathBuf) -> CalendarCache {
        CalendarCache {
            base_dir,
            memory: RwLock::new(HashMap::new()),
        }
    }

    /// Directory holding cache files for the current engine version.
    pub fn version_dir(&self) -> PathBuf {
        self.base_dir.join(format!("v_{ENGINE_VERSION}"))
    }

    fn file_path(&self, year: i32, rite: &str, locale: &str) -> PathBuf {
        self.version_dir()
            .join(format!("{}.json", cache_key(year, rite, locale)))
    }

    /// Get a year's calendar: memory first, then disk, then the engine.
    ///
    /// Engine builds are written through to both levels; stale version
    /// directories are cleaned up after a successful build.
    pub fn get_or_build(
        &self,
        year: i32,
        rite: &str,
        locale: &str,
    ) -> OrdoResult<Arc<Vec<OrdoDay>>> {
        let key = cache_key(year, rite, locale);

        if let Some(days) = self.memory_get(&key) {
            return Ok(days);
        }

        if let Some(days) = self.load_from_disk(year, rite, locale) {
            let days = Arc::new(days);
            self.memory_insert(&key, Arc::clone(&days));
            return Ok(days);
        }

        let days = Arc::new(LiturgicalCalendar::new(year, rite, locale)?.build());
        self.memory_insert(&key, Arc::clone(&days));
        // Write-through is best effort: a failed disk write must not fail
        // the request that produced the calendar.
        let _ = self.save_to_disk(&days, year, rite, locale);
        self.cleanup_old_versions();

        Ok(days)
    }

    fn memory_get(&self, key: &str) -> Option<Arc<Vec<OrdoDay>>> {
        let map = self.memory.read().unwrap_or_else(|e| e.into_inner());
        map.get(key).cloned()
    }

    fn memory_insert(&self, key: &str, days: Arc<Vec<OrdoDay>>) {
        let mut map = self.memory.write().unwrap_or_else(|e| e.into_inner());
        map.insert(key.to_string(), days);
    }

    /// Load one year from disk. A missing file is a miss; a corrupted
    /// file is deleted and treated as a miss, never an error.
    fn load_from_disk(&self, year: i32, rite: &str, locale: &str) -> Option<Vec<OrdoDay>> {
        let path = self.file_path(year, rite, locale);
        let file = File::open(&path).ok()?;

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(days) => Some(days),
            Err(_) => {
                let _ = fs::remove_file(&path);
                None
            }
        }
    }

    fn save_to_disk(
        &self,
        days: &[OrdoDay],
        year: i32,
        rite: &str,
        locale: &str,
    ) -> OrdoResult<()> {
        let path = self.file_path(year, rite, locale);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(&path)?;
        serde_json::to_writer(BufWriter::new(file), days)?;
        Ok(())
    }

    /// Remove version directories left behind by older engine versions.
    pub fn cleanup_old_versions(&self) {
        let current = self.version_dir();
        let Ok(entries) = fs::read_dir(&self.base_dir) else {
            return;
        };

        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.is_dir() && path != current {
                let _ = fs::remove_dir_all(&path);
            }
        }
    }

    /// Drop both cache levels, leaving an empty base directory behind.
    pub fn clear(&self) -> OrdoResult<()> {
        {
            let mut map = self.memory.write().unwrap_or_else(|e| e.into_inner());
            map.clear();
        }

        if self.base_dir.exists() {
            fs::remove_dir_all(&self.base_dir)
                .map_err(|e| OrdoError::Cache(format!("Failed to clear cache: {e}")))?;
        }
        fs::create_dir_all(&self.base_dir)?;

        Ok(())
    }

    pub fn status(&self) -> CacheStatus {
        let mut in_memory_keys: Vec<String> = {
            let map = self.memory.read().unwrap_or_else(|e| e.into_inner());
            map.keys().cloned().collect()
        };
        in_memory_keys.sort();

        let cached_files = list_cache_files(&self.version_dir());
        let total_cached_files = cached_files.len();

        CacheStatus {
            engine_version: ENGINE_VERSION.to_string(),
            cache_directory: self.version_dir().display().to_string(),
            in_memory_keys,
            cached_files,
            total_cached_files,
        }
    }
}

fn list_cache_files(dir: &Path) -> Vec<CacheFileInfo> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut files: Vec<CacheFileInfo> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
        .filter_map(|e| {
            let meta = e.metadata().ok()?;
            Some(CacheFileInfo {
                filename: e.file_name().to_string_lossy().to_string(),
                size_bytes: meta.len(),
                modified: meta.modified().ok().map(DateTime::<Utc>::from),
            })
        })
        .collect();

    files.sort_by(|a, b| a.filename.cmp(&b.filename));
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_LOCALE, DEFAULT_RITE};

    fn test_cache() -> (tempfile::TempDir, CalendarCache) {
        let dir = tempfile::tempdir().unwrap();
        let cache = CalendarCache::new(dir.path().to_path_buf());
        (dir, cache)
    }

    #[test]
    fn test_build_writes_through_to_disk_and_memory() {
        let (_dir, cache) = test_cache();

        let days = cache.get_or_build(2024, DEFAULT_RITE, DEFAULT_LOCALE).unwrap();
        assert_eq!(days.len(), 366);

        let status = cache.status();
        assert_eq!(status.in_memory_keys, vec!["2024_roman_la".to_string()]);
        assert_eq!(status.total_cached_files, 1);
        assert_eq!(status.cached_files[0].filename, "2024_roman_la.json");

        // Second call hits memory and returns the same data
        let again = cache.get_or_build(2024, DEFAULT_RITE, DEFAULT_LOCALE).unwrap();
        assert!(Arc::ptr_eq(&days, &again));
    }

    #[test]
    fn test_disk_cache_survives_memory_loss() {
        let dir = tempfile::tempdir().unwrap();

        let cache = CalendarCache::new(dir.path().to_path_buf());
        let built = cache.get_or_build(2023, DEFAULT_RITE, DEFAULT_LOCALE).unwrap();

        // Fresh cache instance simulating a process restart
        let cache = CalendarCache::new(dir.path().to_path_buf());
        let loaded = cache.get_or_build(2023, DEFAULT_RITE, DEFAULT_LOCALE).unwrap();
        assert_eq!(*built, *loaded);
    }

    #[test]
    fn test_corrupted_file_is_removed_and_rebuilt() {
        let (_dir, cache) = test_cache();

        let path = cache.file_path(2024, DEFAULT_RITE, DEFAULT_LOCALE);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let days = cache.get_or_build(2024, DEFAULT_RITE, DEFAULT_LOCALE).unwrap();
        assert_eq!(days.len(), 366);

        // The rebuilt file replaced the corrupted one
        let reloaded = cache.load_from_disk(2024, DEFAULT_RITE, DEFAULT_LOCALE);
        assert!(reloaded.is_some());
    }

    #[test]
    fn test_stale_version_dirs_are_cleaned_up() {
        let (_dir, cache) = test_cache();

        let old_dir = cache.base_dir.join("v_0.0.1");
        fs::create_dir_all(&old_dir).unwrap();
        fs::write(old_dir.join("2020_roman_la.json"), "[]").unwrap();

        cache.get_or_build(2024, DEFAULT_RITE, DEFAULT_LOCALE).unwrap();
        assert!(!old_dir.exists());
        assert!(cache.version_dir().exists());
    }

    #[test]
    fn test_clear_empties_both_levels() {
        let (_dir, cache) = test_cache();
        cache.get_or_build(2024, DEFAULT_RITE, DEFAULT_LOCALE).unwrap();

        cache.clear().unwrap();

        let status = cache.status();
        assert!(status.in_memory_keys.is_empty());
        assert_eq!(status.total_cached_files, 0);
        assert!(cache.base_dir.exists());
    }

    #[test]
    fn test_out_of_range_year_is_an_error() {
        let (_dir, cache) = test_cache();
        assert!(cache.get_or_build(1850, DEFAULT_RITE, DEFAULT_LOCALE).is_err());
    }
}
