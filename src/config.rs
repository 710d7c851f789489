//! Configuration management for the book tracker.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf};

use crate::management::STORE_KEY_BOOKS;

/// File name used when exporting without an explicit output path.
pub const EXPORT_FILE_NAME: &str = "books.json";

/// Loads environment variables from `booktrack/.env` in the local data directory.
///
/// A missing `.env` file is not an error; every setting has a default.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/booktrack/.env`
/// - macOS: `~/Library/Application Support/booktrack/.env`
/// - Windows: `%LOCALAPPDATA%/booktrack/.env`
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("booktrack/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Directory holding the persisted collection.
///
/// `BOOKTRACK_DATA_DIR` overrides the default `<local data dir>/booktrack/store`.
pub fn data_dir() -> PathBuf {
    match env::var("BOOKTRACK_DATA_DIR") {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => {
            let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
            path.push("booktrack/store");
            path
        }
    }
}

/// Key the collection is stored under, `books` unless `BOOKTRACK_STORE_KEY` is set.
pub fn store_key() -> String {
    env::var("BOOKTRACK_STORE_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty())
        .unwrap_or_else(|| STORE_KEY_BOOKS.to_string())
}
