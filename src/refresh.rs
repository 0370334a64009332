//! Cache refresh orchestration
//!
//! Walks the requested academic years, refreshes the stale or missing ones
//! from the catalog API one at a time, and reports progress through a
//! message enum that the caller renders. A failed year never aborts the
//! run and never touches that year's existing cache file.

use crate::acad_year::AcademicYear;
use crate::cache::CacheStore;
use crate::data::{FetchError, ModuleCatalogClient};

/// Messages emitted while bringing the cache up to date
#[derive(Debug, Clone)]
pub enum RefreshEvent {
    /// A stale or missing year is about to be fetched
    Refreshing { year: AcademicYear },
    /// A year's cache file was rewritten with `count` records
    Refreshed { year: AcademicYear, count: usize },
    /// A year's refresh failed; its cache file was left as-is
    Failed { year: AcademicYear, reason: String },
    /// Every requested year is now fresh (or was already)
    UpToDate,
}

/// Keeps the per-year cache files fresh against the catalog API
pub struct Refresher {
    store: CacheStore,
    client: ModuleCatalogClient,
}

impl Refresher {
    /// Creates a refresher against the public NUSMods API
    pub fn new(store: CacheStore) -> Self {
        Self {
            store,
            client: ModuleCatalogClient::new(),
        }
    }

    /// Creates a refresher with a custom catalog client (for testing)
    pub fn with_client(store: CacheStore, client: ModuleCatalogClient) -> Self {
        Self { store, client }
    }

    /// Fetches one year and overwrites its cache file.
    ///
    /// On any failure the existing file is left untouched, so previously
    /// cached data keeps serving.
    ///
    /// # Returns
    /// * `Ok(count)` - Number of records written
    /// * `Err(FetchError)` - If the request, parse or file write fails
    pub async fn refresh_year(&self, year: &AcademicYear) -> Result<usize, FetchError> {
        let records = self.client.fetch_modules(year).await?;
        self.store.write_modules(year, &records)?;
        Ok(records.len())
    }

    /// Brings every stale or missing year up to date, sequentially.
    ///
    /// Fresh years are skipped without touching the network, which bounds
    /// the external calls to the minimum needed. Each stale year is
    /// announced, attempted, and reported as refreshed or failed before
    /// the next one starts; a final `UpToDate` closes the run.
    ///
    /// # Arguments
    /// * `years` - The academic years that must be available
    /// * `on_event` - Callback receiving progress messages to render
    pub async fn ensure_fresh(&self, years: &[AcademicYear], mut on_event: impl FnMut(RefreshEvent)) {
        for year in years {
            if !self.store.is_stale(year) {
                continue;
            }

            on_event(RefreshEvent::Refreshing { year: *year });
            match self.refresh_year(year).await {
                Ok(count) => on_event(RefreshEvent::Refreshed { year: *year, count }),
                Err(e) => on_event(RefreshEvent::Failed {
                    year: *year,
                    reason: e.to_string(),
                }),
            }
        }
        on_event(RefreshEvent::UpToDate);
    }
}
