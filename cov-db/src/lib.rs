//! In-memory SQLite database layer for COVID-19 surveillance data.
//!
//! Loads the three warehouse extracts (state series, county series,
//! demography) from CSV into an in-memory SQLite database and exposes the
//! fixed set of read queries the dashboard needs.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite`
//! - CSV data embedded with `include_str!` by the dashboard, or read from
//!   disk by the CLI
//! - Typed query methods returning `cov_core::record` structs
//!
//! # Usage
//!
//! ```rust
//! use cov_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_state_series("state,date,case_total,out_death\nUS,2021-01-01,100,2\n").unwrap();
//!
//! let rows = db.query_state_series().unwrap();
//! assert_eq!(rows[0].case_total, Some(100.0));
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.
//! - `state_series` - per-state (and "US") daily metrics
//! - `county_series` - per-county daily cases/deaths
//! - `demography` - case/severe/death counts by demographic group

pub mod schema;
mod loader;
mod queries;
pub mod models;

pub use models::{DataAvailability, Dataset, DateSpan};

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the surveillance tables.
///
/// Cheaply cloneable (via `Rc`) and suitable for sharing across Dioxus
/// components in a single-threaded WASM environment.
///
/// # Example
///
/// ```rust
/// use cov_db::Database;
///
/// let db = Database::new().unwrap();
/// db.load_demography("category,group,case_total,out_severe,out_death\nsex,Female,10,2,1\n").unwrap();
/// assert_eq!(db.query_demography().unwrap().len(), 1);
/// ```
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it with CSV data.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

/// Load all three extracts into a fresh database and run the read queries.
///
/// This is the one blocking data load of the dashboard. Any failure is
/// returned to the caller, which decides how to degrade.
pub fn load_dataset(state_csv: &str, county_csv: &str, demography_csv: &str) -> anyhow::Result<Dataset> {
    let db = Database::new()?;
    db.load_state_series(state_csv)?;
    if !county_csv.is_empty() {
        db.load_county_series(county_csv)?;
    }
    if !demography_csv.is_empty() {
        db.load_demography(demography_csv)?;
    }
    if let Some(span) = db.query_date_range()? {
        log::info!("[COV] state series covers {} to {}", span.start, span.end);
    }

    let dataset = Dataset {
        state: db.query_state_series()?,
        county: db.query_county_series()?,
        demography: db.query_demography()?,
    };
    log::info!(
        "[COV] dataset loaded: {} state rows, {} county rows, {} demography rows",
        dataset.state.len(),
        dataset.county.len(),
        dataset.demography.len()
    );
    Ok(dataset)
}
