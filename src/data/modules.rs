//! NUSMods catalog API client
//!
//! Fetches the per-academic-year module summary list from the NUSMods v2
//! API and projects each entry down to the lite record kept in the cache.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::ModuleRecord;
use crate::acad_year::AcademicYear;

/// Base URL for the NUSMods v2 API
const NUSMODS_BASE_URL: &str = "https://api.nusmods.com/v2";

/// Errors that can occur when refreshing a year's module data
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-200 status
    #[error("unexpected HTTP status: {0}")]
    Status(StatusCode),

    /// The response body was not a valid module list
    #[error("failed to parse module list: {0}")]
    Parse(#[from] serde_json::Error),

    /// Writing the cache file failed
    #[error("cache write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Upstream module object as served by `moduleInfo.json`.
///
/// The upstream carries many more fields (semester data, departments,
/// attributes); only the three that are projected into the cache are
/// deserialized and everything else is ignored. `moduleCredit` arrives
/// as a JSON string for most modules, so it is taken as a raw value and
/// coerced afterwards.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpstreamModule {
    #[serde(default)]
    module_code: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    module_credit: Option<Value>,
}

/// Client for fetching module summaries from the NUSMods API
#[derive(Debug, Clone)]
pub struct ModuleCatalogClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Base URL for the API (allows override for testing)
    base_url: String,
}

impl Default for ModuleCatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleCatalogClient {
    /// Creates a new client against the public NUSMods API
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            base_url: NUSMODS_BASE_URL.to_string(),
        }
    }

    /// Creates a new client with a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches and projects the module list for one academic year.
    ///
    /// Issues a single `GET {base}/{year}/moduleInfo.json`. Any non-200
    /// status, transport failure or malformed body is returned as a
    /// [`FetchError`]; deciding whether that is fatal is the caller's
    /// business.
    ///
    /// # Arguments
    /// * `year` - The academic year to fetch, used as the URL path segment
    ///
    /// # Returns
    /// * `Ok(Vec<ModuleRecord>)` - Projected records in upstream order
    /// * `Err(FetchError)` - If the request, status or parse fails
    pub async fn fetch_modules(&self, year: &AcademicYear) -> Result<Vec<ModuleRecord>, FetchError> {
        let url = format!("{}/{}/moduleInfo.json", self.base_url, year);

        let response = self.http_client.get(&url).send().await?;
        if response.status() != StatusCode::OK {
            return Err(FetchError::Status(response.status()));
        }

        let text = response.text().await?;
        let upstream: Vec<UpstreamModule> = serde_json::from_str(&text)?;

        Ok(upstream.into_iter().map(project).collect())
    }
}

/// Projects an upstream module down to the cached lite record
fn project(module: UpstreamModule) -> ModuleRecord {
    ModuleRecord {
        module_code: module.module_code,
        title: module.title,
        module_credit: module
            .module_credit
            .as_ref()
            .map(credit_value)
            .unwrap_or(0.0),
    }
}

/// Coerces the upstream `moduleCredit` value to a float.
///
/// The API serves credits as strings ("4", "4.5"); a few records carry
/// non-numeric values such as "Var", which count as 0.
fn credit_value(value: &Value) -> f64 {
    match value {
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        _ => 0.0,
    }
}
