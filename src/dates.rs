use chrono::{DateTime, NaiveDate, NaiveTime, ParseResult, TimeZone};

/// Wire format for all calendar days, request bodies and store keys alike.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Collapse a timestamp to its calendar day.
///
/// The day is taken field-wise from the timestamp's own offset (the date a
/// wall clock in that zone would show) and pinned to a single canonical day
/// value with no time-of-day component, so any two timestamps on the same
/// calendar day compare equal as map keys.
pub fn normalize<Tz: TimeZone>(ts: &DateTime<Tz>) -> NaiveDate {
    ts.date_naive()
}

/// Strict `YYYY-MM-DD` parse to a normalized calendar day.
pub fn parse_day(value: &str) -> ParseResult<NaiveDate> {
    let parsed = NaiveDate::parse_from_str(value, DAY_FORMAT)?;
    Ok(normalize(&parsed.and_time(NaiveTime::MIN).and_utc()))
}

/// `YYYY-MM-DD` string key for a normalized day.
pub fn day_key(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

/// Every day from `start` to `end`, both inclusive. Empty when start > end.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, Utc};

    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_normalize_strips_time_of_day() {
        let morning = Utc.with_ymd_and_hms(2024, 12, 5, 6, 30, 0).unwrap();
        let evening = Utc.with_ymd_and_hms(2024, 12, 5, 23, 59, 59).unwrap();
        assert_eq!(normalize(&morning), day(2024, 12, 5));
        assert_eq!(normalize(&morning), normalize(&evening));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let ts = Utc.with_ymd_and_hms(2024, 12, 5, 18, 15, 0).unwrap();
        let once = normalize(&ts);
        let midnight = Utc.from_utc_datetime(&once.and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(normalize(&midnight), once);
    }

    #[test]
    fn test_normalize_keeps_displayed_calendar_day() {
        // 23:30 at UTC-5 is already the next day in UTC proper; the displayed
        // date wins.
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let ts = offset.with_ymd_and_hms(2024, 12, 1, 23, 30, 0).unwrap();
        assert_eq!(normalize(&ts), day(2024, 12, 1));
    }

    #[test]
    fn test_parse_day() {
        assert_eq!(parse_day("2024-12-01").unwrap(), day(2024, 12, 1));
        assert!(parse_day("2024-13-01").is_err());
        assert!(parse_day("01-12-2024").is_err());
        assert!(parse_day("not-a-date").is_err());
    }

    #[test]
    fn test_parse_day_agrees_with_normalize() {
        let noon = Utc.with_ymd_and_hms(2024, 12, 5, 12, 0, 0).unwrap();
        assert_eq!(parse_day("2024-12-05").unwrap(), normalize(&noon));
    }

    #[test]
    fn test_day_key_round_trips_parse() {
        let key = day_key(day(2024, 12, 5));
        assert_eq!(key, "2024-12-05");
        assert_eq!(parse_day(&key).unwrap(), day(2024, 12, 5));
    }

    #[test]
    fn test_days_inclusive() {
        let days: Vec<_> = days_inclusive(day(2024, 12, 1), day(2024, 12, 3)).collect();
        assert_eq!(
            days,
            vec![day(2024, 12, 1), day(2024, 12, 2), day(2024, 12, 3)]
        );

        let single: Vec<_> = days_inclusive(day(2024, 12, 1), day(2024, 12, 1)).collect();
        assert_eq!(single, vec![day(2024, 12, 1)]);

        assert_eq!(days_inclusive(day(2024, 12, 2), day(2024, 12, 1)).count(), 0);
    }
}
