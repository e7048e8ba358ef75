//! Watch-date parsing.
//!
//! Dates arrive as `M/D/YY` text. Anything that does not parse is kept for
//! display but never contributes to a "most recent" sort key.

use chrono::{Datelike, NaiveDate};

/// Format of exported watch dates.
const DATE_FORMAT: &str = "%m/%d/%y";

/// chrono reads two-digit `69` as 2069; exports mean 1969 (`69`-`99` are 19xx).
const MISREAD_YEAR: i32 = 2069;

/// Parse a `M/D/YY` watch date.
///
/// Two-digit years `00`-`68` are 20xx and `69`-`99` are 19xx.
/// Returns `None` for malformed or impossible dates.
pub fn parse_watch_date(date: &str) -> Option<NaiveDate> {
    let parsed = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()?;
    if parsed.year() == MISREAD_YEAR {
        return parsed.with_year(MISREAD_YEAR - 100);
    }
    Some(parsed)
}

/// Unix timestamp (UTC midnight) of a watch date, if it parses.
pub fn watch_timestamp(date: &str) -> Option<i64> {
    parse_watch_date(date)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp())
}

/// Most recent timestamp among `dates`.
///
/// Unparsable dates are ignored; if nothing beats zero the result is zero.
pub fn latest_timestamp<'a, I>(dates: I) -> i64
where
    I: IntoIterator<Item = &'a str>,
{
    dates
        .into_iter()
        .filter_map(watch_timestamp)
        .fold(0, i64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unpadded_date() {
        assert_eq!(
            parse_watch_date("1/2/23"),
            NaiveDate::from_ymd_opt(2023, 1, 2)
        );
        assert_eq!(
            parse_watch_date("12/31/99"),
            NaiveDate::from_ymd_opt(1999, 12, 31)
        );
    }

    #[test]
    fn test_two_digit_year_century() {
        assert_eq!(
            parse_watch_date("12/31/68"),
            NaiveDate::from_ymd_opt(2068, 12, 31)
        );
        assert_eq!(
            parse_watch_date("12/31/69"),
            NaiveDate::from_ymd_opt(1969, 12, 31)
        );
        assert_eq!(
            parse_watch_date("1/1/70"),
            NaiveDate::from_ymd_opt(1970, 1, 1)
        );
    }

    #[test]
    fn test_1969_date_never_wins() {
        assert_eq!(
            latest_timestamp(["12/31/69", "1/1/20"]),
            watch_timestamp("1/1/20").unwrap()
        );
        assert_eq!(latest_timestamp(["12/31/69"]), 0);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_watch_date("not-a-date"), None);
        assert_eq!(parse_watch_date("2/30/23"), None);
        assert_eq!(parse_watch_date("2023-01-02"), None);
        assert_eq!(parse_watch_date(""), None);
    }

    #[test]
    fn test_latest_timestamp() {
        let ts = latest_timestamp(["1/1/20", "3/1/20", "2/1/20"]);
        assert_eq!(ts, watch_timestamp("3/1/20").unwrap());
        assert_eq!(ts, 1_583_020_800);
    }

    #[test]
    fn test_latest_timestamp_ignores_malformed() {
        let ts = latest_timestamp(["not-a-date", "1/1/20"]);
        assert_eq!(ts, watch_timestamp("1/1/20").unwrap());
        assert_eq!(latest_timestamp(["not-a-date"]), 0);
        assert_eq!(latest_timestamp(std::iter::empty()), 0);
    }
}
