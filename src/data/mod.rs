//! Core data models for the module catalog
//!
//! Contains the reduced ("lite") module record that is cached on disk and
//! the catalog API client that produces it.

pub mod modules;

pub use modules::{FetchError, ModuleCatalogClient};

use serde::{Deserialize, Serialize};

/// Reduced projection of an upstream module record.
///
/// This is the exact shape persisted in the per-year cache files: a bare
/// JSON array of `{moduleCode, title, moduleCredit}` objects. Fields the
/// upstream omits stay `null`; credits default to 0. Uniqueness of module
/// codes is not enforced locally, the upstream is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRecord {
    /// Module code, e.g. "CS1010"
    pub module_code: Option<String>,
    /// Module title, e.g. "Programming Methodology"
    pub title: Option<String>,
    /// Modular credits; 0 when absent or unparseable upstream
    #[serde(default)]
    pub module_credit: f64,
}
