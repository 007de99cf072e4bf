//! Date helpers.
//!
//! Extracts arrive with either ISO (`YYYY-MM-DD`) or compact (`YYYYMMDD`)
//! dates. Everything downstream of the loader works with ISO strings, which
//! sort chronologically and are what the D3 time scale parses.

use chrono::NaiveDate;

/// ISO date format used throughout the dashboard.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Compact date format found in some warehouse extracts.
pub const COMPACT_FORMAT: &str = "%Y%m%d";

/// Parse a date in either ISO or compact format.
pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    let s = s.trim();
    let fmt = if s.len() == 8 && !s.contains('-') {
        COMPACT_FORMAT
    } else {
        ISO_FORMAT
    };
    Ok(NaiveDate::parse_from_str(s, fmt)?)
}

/// Normalise a date string to `YYYY-MM-DD`.
pub fn normalize_date(s: &str) -> anyhow::Result<String> {
    Ok(parse_date(s)?.format(ISO_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_and_compact() {
        let expected = NaiveDate::from_ymd_opt(2021, 1, 15).unwrap();
        assert_eq!(parse_date("2021-01-15").unwrap(), expected);
        assert_eq!(parse_date("20210115").unwrap(), expected);
        assert_eq!(parse_date(" 2021-01-15 ").unwrap(), expected);
    }

    #[test]
    fn normalizes_compact_to_iso() {
        assert_eq!(normalize_date("20200301").unwrap(), "2020-03-01");
        assert_eq!(normalize_date("2020-03-01").unwrap(), "2020-03-01");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_date("").is_err());
        assert!(parse_date("2021-13-01").is_err());
        assert!(parse_date("not a date").is_err());
    }
}
