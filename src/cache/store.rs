//! File-backed store for per-academic-year module lists
//!
//! Provides a `CacheStore` that keeps one `modules_lite_{AY}.json` file per
//! academic year and classifies each file as fresh or stale from its
//! modification time. Files are overwritten wholesale on refresh and never
//! deleted, so old data stays available when the API is unreachable.

use chrono::{DateTime, Duration, Utc};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

use crate::acad_year::AcademicYear;
use crate::data::ModuleRecord;

/// Hours after which a cache file is due for refresh
const MAX_AGE_HOURS: i64 = 24;

/// Manages reading and writing the per-year module cache files
///
/// The store keeps its files in an XDG-compliant cache directory
/// (`~/.cache/modcat/` on Linux). Each academic year maps to a single
/// JSON file holding the bare array of lite module records.
#[derive(Debug, Clone)]
pub struct CacheStore {
    /// Directory where cache files are stored
    cache_dir: PathBuf,
}

impl CacheStore {
    /// Creates a new CacheStore using the XDG-compliant cache directory
    ///
    /// Returns `None` if the cache directory cannot be determined (e.g., no
    /// home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "modcat")?;
        let cache_dir = project_dirs.cache_dir().to_path_buf();
        Some(Self { cache_dir })
    }

    /// Creates a new CacheStore with a custom cache directory
    ///
    /// Useful for testing or when a specific cache location is needed.
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    /// Returns the path of the cache file for the given academic year
    pub fn file_path(&self, year: &AcademicYear) -> PathBuf {
        self.cache_dir.join(format!("modules_lite_{}.json", year))
    }

    /// Ensures the cache directory exists
    fn ensure_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.cache_dir)
    }

    /// Reports whether a year's cache file is due for refresh.
    ///
    /// A year is stale when its file is absent, its modification time is
    /// unreadable, or the file is older than 24 hours.
    pub fn is_stale(&self, year: &AcademicYear) -> bool {
        let Ok(metadata) = fs::metadata(self.file_path(year)) else {
            return true;
        };
        match metadata.modified() {
            Ok(mtime) => is_stale_at(mtime.into(), Utc::now()),
            Err(_) => true,
        }
    }

    /// Overwrites a year's cache file with the given records.
    ///
    /// The file is replaced wholesale; there is no merging with previous
    /// contents. Creates the cache directory on first use.
    ///
    /// # Arguments
    /// * `year` - The academic year the records belong to
    /// * `records` - The projected module records to persist
    ///
    /// # Returns
    /// * `Ok(())` on success
    /// * `Err` if directory creation or file writing fails
    pub fn write_modules(&self, year: &AcademicYear, records: &[ModuleRecord]) -> std::io::Result<()> {
        self.ensure_dir()?;

        let json = serde_json::to_string(records)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        fs::write(self.file_path(year), json)
    }

    /// Reads a year's cached records.
    ///
    /// Returns `None` if the file doesn't exist or cannot be parsed as a
    /// module list; the distinction doesn't matter to callers, both mean
    /// "no usable data".
    pub fn read_modules(&self, year: &AcademicYear) -> Option<Vec<ModuleRecord>> {
        let content = fs::read_to_string(self.file_path(year)).ok()?;
        serde_json::from_str(&content).ok()
    }
}

/// Classifies a file modification time as stale relative to `now`
fn is_stale_at(modified: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(modified) > Duration::hours(MAX_AGE_HOURS)
}
