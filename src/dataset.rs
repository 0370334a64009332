//! Tabular view over cached module records
//!
//! Loads one academic year's cache file into an in-memory table with a
//! derived display label per row, memoizing the result per year so the
//! presentation layer can call `load` freely.

use std::collections::HashMap;

use crate::acad_year::AcademicYear;
use crate::cache::CacheStore;
use crate::data::ModuleRecord;

/// One row of a loaded dataset
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleRow {
    /// Module code; empty string when the upstream record had none
    pub module_code: String,
    /// Module title; empty string when the upstream record had none
    pub title: String,
    /// Modular credits
    pub module_credit: f64,
    /// Search and selection label, `"CODE: Title"`
    pub display_label: String,
}

/// In-memory table of one academic year's cached modules, in file order
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<ModuleRow>,
}

impl Dataset {
    /// Builds the table from cached records, deriving the display label
    fn from_records(records: Vec<ModuleRecord>) -> Self {
        let rows = records
            .into_iter()
            .map(|record| {
                let module_code = record.module_code.unwrap_or_default();
                let title = record.title.unwrap_or_default();
                let display_label = format!("{}: {}", module_code, title);
                ModuleRow {
                    module_code,
                    title,
                    module_credit: record.module_credit,
                    display_label,
                }
            })
            .collect();
        Self { rows }
    }

    /// Returns the rows in cache-file order
    pub fn rows(&self) -> &[ModuleRow] {
        &self.rows
    }

    /// Returns the number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Reports whether the dataset has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Loads datasets from the cache store, memoizing one per academic year.
///
/// The memo lives as long as the loader (normally the process) and is not
/// invalidated when a cache file changes on disk; [`DatasetLoader::reset`]
/// drops it.
pub struct DatasetLoader {
    store: CacheStore,
    memo: HashMap<AcademicYear, Dataset>,
}

impl DatasetLoader {
    /// Creates a loader over the given cache store with an empty memo
    pub fn new(store: CacheStore) -> Self {
        Self {
            store,
            memo: HashMap::new(),
        }
    }

    /// Returns the dataset for an academic year.
    ///
    /// A missing or unparseable cache file yields an empty dataset rather
    /// than an error; the presentation layer treats both the same way.
    /// Repeated calls for the same year return the memoized table without
    /// re-reading the file.
    pub fn load(&mut self, year: &AcademicYear) -> &Dataset {
        let store = &self.store;
        self.memo.entry(*year).or_insert_with(|| {
            store
                .read_modules(year)
                .map(Dataset::from_records)
                .unwrap_or_default()
        })
    }

    /// Returns the rows whose display label contains `query`, ignoring case
    pub fn search(&mut self, year: &AcademicYear, query: &str) -> Vec<ModuleRow> {
        let needle = query.to_lowercase();
        self.load(year)
            .rows()
            .iter()
            .filter(|row| row.display_label.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Drops all memoized datasets so the next load re-reads the files
    pub fn reset(&mut self) {
        self.memo.clear();
    }
}
