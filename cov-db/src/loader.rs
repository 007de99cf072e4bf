//! CSV data loading functions for populating the in-memory SQLite database.
//!
//! Each loader parses a warehouse extract from a string slice and inserts
//! rows into the corresponding table. Columns are located by header name,
//! so extracts may omit metric columns or order them differently; the key
//! columns are required.
//!
//! # CSV Formats (all with headers)
//!
//! - **State series**: `state,date,case_total,out_death,out_severe,pop_infect_rate,case_severe_rate,case_death_rate,severe_death_rate`
//! - **County series**: `state,county,date,case_total,out_death`
//! - **Demography**: `category,group,case_total,out_severe,out_death`
//!
//! Dates may be `YYYY-MM-DD` or `YYYYMMDD`; they are stored as `YYYY-MM-DD`.
//! Metric cells that are empty, non-numeric or negative are stored as NULL.

use crate::Database;
use cov_core::date::normalize_date;
use csv::StringRecord;
use rusqlite::params;

/// Metric columns of the state series table, in schema order.
const STATE_METRIC_COLUMNS: [&str; 7] = [
    "case_total",
    "out_death",
    "out_severe",
    "pop_infect_rate",
    "case_severe_rate",
    "case_death_rate",
    "severe_death_rate",
];

/// Header name → field index lookup for one extract.
struct Columns {
    headers: StringRecord,
}

impl Columns {
    fn new(headers: &StringRecord) -> Self {
        Self {
            headers: headers.iter().map(|h| h.trim().to_ascii_lowercase()).collect(),
        }
    }

    fn index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    fn require(&self, name: &str, table: &str) -> anyhow::Result<usize> {
        match self.index(name) {
            Some(i) => Ok(i),
            None => anyhow::bail!("{} extract is missing required column '{}'", table, name),
        }
    }
}

/// Counts of cells that were present but unusable.
#[derive(Default)]
struct CellStats {
    dropped: u32,
}

impl CellStats {
    /// Parse an optional metric cell, keeping only non-negative finite numbers.
    fn metric(&mut self, record: &StringRecord, idx: Option<usize>) -> Option<f64> {
        let raw = idx.and_then(|i| record.get(i)).unwrap_or("").trim();
        if raw.is_empty() {
            return None;
        }
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => Some(v),
            _ => {
                self.dropped += 1;
                None
            }
        }
    }
}

fn text<'r>(record: &'r StringRecord, idx: usize) -> &'r str {
    record.get(idx).unwrap_or("").trim()
}

fn reader(csv_data: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes())
}

impl Database {
    /// Load the state-level series from CSV string.
    ///
    /// # Example CSV
    /// ```text
    /// state,date,case_total,out_death
    /// US,2021-01-01,100,2
    /// CA,2021-01-01,10,1
    /// ```
    pub fn load_state_series(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = reader(csv_data);
        let cols = Columns::new(rdr.headers()?);
        let state_idx = cols.require("state", "state series")?;
        let date_idx = cols.require("date", "state series")?;
        let metric_idx: Vec<Option<usize>> =
            STATE_METRIC_COLUMNS.iter().map(|c| cols.index(c)).collect();

        let tx = conn.unchecked_transaction()?;
        let mut stats = CellStats::default();
        let mut count = 0u32;
        let mut skipped = 0u32;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO state_series
                 (state, date, case_total, out_death, out_severe, pop_infect_rate,
                  case_severe_rate, case_death_rate, severe_death_rate)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                 ON CONFLICT(state, date) DO UPDATE SET
                  case_total = excluded.case_total,
                  out_death = excluded.out_death,
                  out_severe = excluded.out_severe,
                  pop_infect_rate = excluded.pop_infect_rate,
                  case_severe_rate = excluded.case_severe_rate,
                  case_death_rate = excluded.case_death_rate,
                  severe_death_rate = excluded.severe_death_rate",
            )?;
            for result in rdr.records() {
                let r = result?;
                let state = text(&r, state_idx);
                let date = match normalize_date(text(&r, date_idx)) {
                    Ok(d) => d,
                    Err(_) => {
                        skipped += 1;
                        continue;
                    }
                };
                if state.is_empty() {
                    skipped += 1;
                    continue;
                }
                let m: Vec<Option<f64>> = metric_idx.iter().map(|&i| stats.metric(&r, i)).collect();
                stmt.execute(params![state, date, m[0], m[1], m[2], m[3], m[4], m[5], m[6]])?;
                count += 1;
            }
        }
        tx.commit()?;

        log::info!("[COV] loader: Loaded {} state series rows, skipped {}", count, skipped);
        if stats.dropped > 0 {
            log::warn!("[COV] loader: Dropped {} unusable state metric cells", stats.dropped);
        }
        Ok(())
    }

    /// Load the county-level series from CSV string.
    ///
    /// # Example CSV
    /// ```text
    /// state,county,date,case_total,out_death
    /// CA,Alameda,2021-01-01,5,0
    /// ```
    pub fn load_county_series(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = reader(csv_data);
        let cols = Columns::new(rdr.headers()?);
        let state_idx = cols.require("state", "county series")?;
        let county_idx = cols.require("county", "county series")?;
        let date_idx = cols.require("date", "county series")?;
        let cases_idx = cols.index("case_total");
        let deaths_idx = cols.index("out_death");

        let tx = conn.unchecked_transaction()?;
        let mut stats = CellStats::default();
        let mut count = 0u32;
        let mut skipped = 0u32;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO county_series (state, county, date, case_total, out_death)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(state, county, date) DO UPDATE SET
                  case_total = excluded.case_total,
                  out_death = excluded.out_death",
            )?;
            for result in rdr.records() {
                let r = result?;
                let state = text(&r, state_idx);
                let county = text(&r, county_idx);
                let date = match normalize_date(text(&r, date_idx)) {
                    Ok(d) => d,
                    Err(_) => {
                        skipped += 1;
                        continue;
                    }
                };
                if state.is_empty() || county.is_empty() {
                    skipped += 1;
                    continue;
                }
                let cases = stats.metric(&r, cases_idx);
                let deaths = stats.metric(&r, deaths_idx);
                stmt.execute(params![state, county, date, cases, deaths])?;
                count += 1;
            }
        }
        tx.commit()?;

        log::info!("[COV] loader: Loaded {} county series rows, skipped {}", count, skipped);
        if stats.dropped > 0 {
            log::warn!("[COV] loader: Dropped {} unusable county metric cells", stats.dropped);
        }
        Ok(())
    }

    /// Load the demographic breakdown from CSV string.
    ///
    /// # Example CSV
    /// ```text
    /// category,group,case_total,out_severe,out_death
    /// age_group,18 to 49 years,1200,80,9
    /// sex,Female,2100,90,11
    /// ```
    pub fn load_demography(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = reader(csv_data);
        let cols = Columns::new(rdr.headers()?);
        let category_idx = cols.require("category", "demography")?;
        let group_idx = cols.require("group", "demography")?;
        let cases_idx = cols.index("case_total");
        let severe_idx = cols.index("out_severe");
        let deaths_idx = cols.index("out_death");

        let tx = conn.unchecked_transaction()?;
        let mut stats = CellStats::default();
        let mut count = 0u32;
        let mut skipped = 0u32;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO demography (category, grp, case_total, out_severe, out_death)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(category, grp) DO UPDATE SET
                  case_total = excluded.case_total,
                  out_severe = excluded.out_severe,
                  out_death = excluded.out_death",
            )?;
            for result in rdr.records() {
                let r = result?;
                let category = text(&r, category_idx);
                let group = text(&r, group_idx);
                if category.is_empty() || group.is_empty() {
                    skipped += 1;
                    continue;
                }
                let cases = stats.metric(&r, cases_idx);
                let severe = stats.metric(&r, severe_idx);
                let deaths = stats.metric(&r, deaths_idx);
                stmt.execute(params![category, group, cases, severe, deaths])?;
                count += 1;
            }
        }
        tx.commit()?;

        log::info!("[COV] loader: Loaded {} demography rows, skipped {}", count, skipped);
        if stats.dropped > 0 {
            log::warn!("[COV] loader: Dropped {} unusable demography cells", stats.dropped);
        }
        Ok(())
    }
}
