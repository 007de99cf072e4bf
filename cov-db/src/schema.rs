//! SQL schema definitions for the in-memory SQLite database.
//!
//! The schema is applied as a single batch when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// - `state_series` - one row per (state, date); `state` is a state name or "US"
/// - `county_series` - one row per (state, county, date)
/// - `demography` - one row per (category, group)
///
/// Metric columns are nullable: a missing cell is NULL, never a sentinel.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS state_series (
        state TEXT NOT NULL,
        date TEXT NOT NULL,
        case_total REAL,
        out_death REAL,
        out_severe REAL,
        pop_infect_rate REAL,
        case_severe_rate REAL,
        case_death_rate REAL,
        severe_death_rate REAL,
        PRIMARY KEY (state, date)
    );
    CREATE INDEX IF NOT EXISTS idx_state_series_date ON state_series(date);

    CREATE TABLE IF NOT EXISTS county_series (
        state TEXT NOT NULL,
        county TEXT NOT NULL,
        date TEXT NOT NULL,
        case_total REAL,
        out_death REAL,
        PRIMARY KEY (state, county, date)
    );
    CREATE INDEX IF NOT EXISTS idx_county_series_state ON county_series(state);

    CREATE TABLE IF NOT EXISTS demography (
        category TEXT NOT NULL,
        grp TEXT NOT NULL,
        case_total REAL,
        out_severe REAL,
        out_death REAL,
        PRIMARY KEY (category, grp)
    );
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for table in &["state_series", "county_series", "demography"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table '{}' should exist", table);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
