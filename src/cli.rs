//! Command-line interface parsing for modcat
//!
//! This module defines the clap command tree: listing academic years,
//! refreshing the cache, and listing or searching cached modules.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::acad_year::{AcademicYear, DEFAULT_START_YEAR};

/// modcat - fetch, cache and search the NUSMods module catalog
#[derive(Parser, Debug)]
#[command(name = "modcat")]
#[command(about = "NUSMods module catalog cache")]
#[command(version)]
pub struct Cli {
    /// Directory for cache files (defaults to the platform cache dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Earliest academic year offered for selection
    #[arg(long, global = true, default_value_t = DEFAULT_START_YEAR, value_name = "YEAR")]
    pub start_year: i32,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the selectable academic years, newest first
    Years,

    /// Refresh stale or missing cache files from the NUSMods API
    Refresh {
        /// Refresh a single academic year instead of every option
        #[arg(long, value_name = "AY")]
        year: Option<AcademicYear>,
    },

    /// Print the cached modules for an academic year
    List {
        /// Academic year to read, e.g. 2024-2025 (defaults to current)
        #[arg(long, value_name = "AY")]
        year: Option<AcademicYear>,
    },

    /// Search cached modules by code or title
    Search {
        /// Case-insensitive substring to match against "CODE: Title"
        query: String,

        /// Academic year to search, e.g. 2024-2025 (defaults to current)
        #[arg(long, value_name = "AY")]
        year: Option<AcademicYear>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_years_command() {
        let cli = Cli::parse_from(["modcat", "years"]);
        assert!(matches!(cli.command, Command::Years));
        assert_eq!(cli.start_year, DEFAULT_START_YEAR);
        assert!(cli.cache_dir.is_none());
    }

    #[test]
    fn test_parse_refresh_without_year() {
        let cli = Cli::parse_from(["modcat", "refresh"]);
        assert!(matches!(cli.command, Command::Refresh { year: None }));
    }

    #[test]
    fn test_parse_refresh_with_year() {
        let cli = Cli::parse_from(["modcat", "refresh", "--year", "2024-2025"]);
        match cli.command {
            Command::Refresh { year } => {
                assert_eq!(year, Some(AcademicYear::starting(2024)));
            }
            other => panic!("Expected refresh command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_malformed_year() {
        let result = Cli::try_parse_from(["modcat", "refresh", "--year", "2024-2026"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_search_with_query() {
        let cli = Cli::parse_from(["modcat", "search", "cs1010"]);
        match cli.command {
            Command::Search { query, year } => {
                assert_eq!(query, "cs1010");
                assert!(year.is_none());
            }
            other => panic!("Expected search command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["modcat", "years", "--start-year", "2019", "--cache-dir", "/tmp/cache"]);
        assert_eq!(cli.start_year, 2019);
        assert_eq!(cli.cache_dir, Some(PathBuf::from("/tmp/cache")));
    }

    #[test]
    fn test_parse_requires_a_subcommand() {
        assert!(Cli::try_parse_from(["modcat"]).is_err());
    }
}
