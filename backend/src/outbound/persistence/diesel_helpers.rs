//! Shared helpers for Diesel repository implementations.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

/// Half-open `[start, end)` UTC range covering one calendar day.
///
/// Returns `None` when the following midnight is not representable.
pub(crate) fn utc_day_bounds(date: NaiveDate) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = date.and_time(NaiveTime::MIN).and_utc();
    let end = start.checked_add_signed(TimeDelta::days(1))?;
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn bounds_cover_exactly_one_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");
        let (start, end) = utc_day_bounds(date).expect("bounds");

        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 3, 16, 0, 0, 0).unwrap());
    }

    #[test]
    fn last_representable_day_has_no_bounds() {
        assert!(utc_day_bounds(NaiveDate::MAX).is_none());
    }
}
