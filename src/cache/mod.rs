//! Cache module for the per-year module catalog files
//!
//! This module provides the file-backed store that holds one reduced
//! module list per academic year. Freshness is judged from file
//! modification times so stale data keeps serving when a refresh fails.

mod store;

pub use store::CacheStore;
