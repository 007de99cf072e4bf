//! The fixed set of read queries against the surveillance tables.
//!
//! All queries return `cov_core::record` types. State series rows come back
//! in load order (`rowid`), which is what gives the location picker its
//! first-seen ordering.

use crate::models::DateSpan;
use crate::Database;
use cov_core::record::{CountySeriesRecord, DemographyRecord, StateSeriesRecord};

impl Database {
    /// Get every state series row in load order.
    pub fn query_state_series(&self) -> anyhow::Result<Vec<StateSeriesRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT state, date, case_total, out_death, out_severe, pop_infect_rate,
                    case_severe_rate, case_death_rate, severe_death_rate
             FROM state_series
             ORDER BY rowid",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(StateSeriesRecord {
                    location: row.get(0)?,
                    date: row.get(1)?,
                    case_total: row.get(2)?,
                    out_death: row.get(3)?,
                    out_severe: row.get(4)?,
                    pop_infect_rate: row.get(5)?,
                    case_severe_rate: row.get(6)?,
                    case_death_rate: row.get(7)?,
                    severe_death_rate: row.get(8)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[COV] query: query_state_series returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Get every county series row, ordered by state, county, then date.
    pub fn query_county_series(&self) -> anyhow::Result<Vec<CountySeriesRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT state, county, date, case_total, out_death
             FROM county_series
             ORDER BY state, county, date",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(CountySeriesRecord {
                    state: row.get(0)?,
                    county: row.get(1)?,
                    date: row.get(2)?,
                    case_total: row.get(3)?,
                    out_death: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[COV] query: query_county_series returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Get the demographic breakdown in load order.
    pub fn query_demography(&self) -> anyhow::Result<Vec<DemographyRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT category, grp, case_total, out_severe, out_death
             FROM demography
             ORDER BY rowid",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(DemographyRecord {
                    category: row.get(0)?,
                    group: row.get(1)?,
                    case_total: row.get(2)?,
                    out_severe: row.get(3)?,
                    out_death: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[COV] query: query_demography returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Get the earliest and latest dates in the state series.
    ///
    /// Returns `None` when the table is empty.
    pub fn query_date_range(&self) -> anyhow::Result<Option<DateSpan>> {
        let conn = self.conn.borrow();
        let (start, end): (Option<String>, Option<String>) = conn.query_row(
            "SELECT MIN(date), MAX(date) FROM state_series",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(match (start, end) {
            (Some(start), Some(end)) => Some(DateSpan { start, end }),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    fn setup_db() -> Database {
        let db = Database::new().unwrap();
        db.load_state_series(
            "\
state,date,case_total,out_death,pop_infect_rate
CA,2021-01-01,10,1,0.001
US,2021-01-01,100,2,0.002
CA,2021-01-02,12,1,
US,2021-01-02,130,3,0.003
NY,2021-01-01,40,4,0.004
",
        )
        .unwrap();
        db.load_county_series(
            "\
state,county,date,case_total,out_death
CA,Fresno,2021-01-02,8,1
CA,Alameda,2021-01-01,5,0
",
        )
        .unwrap();
        db.load_demography(
            "\
category,group,case_total,out_severe,out_death
sex,Male,50,3,1
sex,Female,60,2,
",
        )
        .unwrap();
        db
    }

    #[test]
    fn query_state_series_keeps_load_order() {
        let db = setup_db();
        let rows = db.query_state_series().unwrap();
        assert_eq!(rows.len(), 5);
        let order: Vec<_> = rows.iter().map(|r| r.location.as_str()).collect();
        assert_eq!(order, vec!["CA", "US", "CA", "US", "NY"]);
    }

    #[test]
    fn query_state_series_maps_nulls() {
        let db = setup_db();
        let rows = db.query_state_series().unwrap();
        let ca2 = rows
            .iter()
            .find(|r| r.location == "CA" && r.date == "2021-01-02")
            .unwrap();
        assert_eq!(ca2.case_total, Some(12.0));
        assert_eq!(ca2.pop_infect_rate, None);
        assert_eq!(ca2.out_severe, None, "Column absent from extract is NULL");
    }

    #[test]
    fn query_county_series_sorted() {
        let db = setup_db();
        let rows = db.query_county_series().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].county, "Alameda");
        assert_eq!(rows[1].county, "Fresno");
    }

    #[test]
    fn query_demography_returns_groups() {
        let db = setup_db();
        let rows = db.query_demography().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].group, "Male");
        assert_eq!(rows[1].out_death, None);
    }

    #[test]
    fn query_date_range() {
        let db = setup_db();
        let span = db.query_date_range().unwrap().unwrap();
        assert_eq!(span.start, "2021-01-01");
        assert_eq!(span.end, "2021-01-02");
    }

    #[test]
    fn query_date_range_empty() {
        let db = Database::new().unwrap();
        assert!(db.query_date_range().unwrap().is_none());
    }
}
