//! modcat - fetch, cache and search NUSMods module catalog data
//!
//! Thin presentation layer over the library: resolves the cache store,
//! computes the academic-year options for today, and dispatches the
//! subcommand. Refresh failures are rendered as warnings and never abort
//! the run; stale data keeps serving.

use chrono::Local;
use clap::Parser;

use modcat::acad_year::academic_year_options;
use modcat::cache::CacheStore;
use modcat::cli::{Cli, Command};
use modcat::dataset::{DatasetLoader, ModuleRow};
use modcat::refresh::{RefreshEvent, Refresher};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let store = match cli.cache_dir {
        Some(ref dir) => CacheStore::with_dir(dir.clone()),
        None => match CacheStore::new() {
            Some(store) => store,
            None => {
                eprintln!("error: could not determine a cache directory; pass --cache-dir");
                std::process::exit(1);
            }
        },
    };

    let today = Local::now().date_naive();
    let (years, current) = academic_year_options(cli.start_year, today);

    match cli.command {
        Command::Years => {
            for year in &years {
                if *year == current {
                    println!("{year} (current)");
                } else {
                    println!("{year}");
                }
            }
        }
        Command::Refresh { year } => {
            let targets = match year {
                Some(year) => vec![year],
                None => years,
            };
            let refresher = Refresher::new(store);
            refresher.ensure_fresh(&targets, render_event).await;
        }
        Command::List { year } => {
            let year = year.unwrap_or(current);
            let mut loader = DatasetLoader::new(store);
            print_rows(loader.load(&year).rows());
        }
        Command::Search { query, year } => {
            let year = year.unwrap_or(current);
            let mut loader = DatasetLoader::new(store);
            print_rows(&loader.search(&year, &query));
        }
    }
}

/// Renders a refresh progress message for the operator
fn render_event(event: RefreshEvent) {
    match event {
        RefreshEvent::Refreshing { year } => {
            println!("Refreshing module data for {year}...");
        }
        RefreshEvent::Refreshed { year, count } => {
            println!("Cached {count} modules for {year}");
        }
        RefreshEvent::Failed { year, reason } => {
            eprintln!("warning: could not refresh {year}: {reason} (keeping existing data)");
        }
        RefreshEvent::UpToDate => {
            println!("Module cache is up to date");
        }
    }
}

/// Prints dataset rows, one display label and credit count per line
fn print_rows(rows: &[ModuleRow]) {
    for row in rows {
        println!("{} ({} MC)", row.display_label, row.module_credit);
    }
}
