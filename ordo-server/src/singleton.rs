//! Single-instance guard for ordo-server.
//!
//! Uses an exclusive flock on a file in the runtime directory; the lock
//! is released when the guard drops (including on panic).

use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

pub struct LockGuard {
    _file: File,
}

fn lock_path() -> Result<PathBuf> {
    let runtime_dir = dirs::runtime_dir()
        .or_else(dirs::cache_dir)
        .ok_or_else(|| anyhow::anyhow!("Could not determine runtime directory"))?;

    let dir = runtime_dir.join("ordo");
    fs::create_dir_all(&dir)?;

    Ok(dir.join("server.lock"))
}

/// Acquire the exclusive server lock, failing if another instance holds it.
pub fn acquire_lock() -> Result<LockGuard> {
    let path = lock_path()?;
    let mut file = File::create(&path).context("Failed to create lock file")?;

    file.try_lock_exclusive().map_err(|_| {
        anyhow::anyhow!(
            "Another ordo-server instance is already running.\n\
            If you believe this is an error, remove: {}",
            path.display()
        )
    })?;

    // Record our PID for whoever has to investigate a stuck lock
    let _ = writeln!(file, "{}", std::process::id());

    Ok(LockGuard { _file: file })
}
