//! Shared request and clock fixtures.

use chrono::NaiveDate;
use contrib_art_core::{FixedClock, PlanRequest};

/// A Sunday used as the pinned window start throughout the tests.
pub const REFERENCE_SUNDAY: (i32, u32, u32) = (2024, 1, 7);

/// Builds a date, panicking on an invalid one.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid test date {year}-{month}-{day}"))
}

/// A clock stuck on `year-month-day`.
pub fn fixed_clock(year: i32, month: u32, day: u32) -> FixedClock {
    FixedClock(date(year, month, day))
}

/// A request for `word` pinned to [`REFERENCE_SUNDAY`].
pub fn pinned_request(word: &str) -> PlanRequest {
    let (y, m, d) = REFERENCE_SUNDAY;
    PlanRequest::new(word).with_start_date(date(y, m, d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    #[test]
    fn test_reference_sunday_is_sunday() {
        let (y, m, d) = REFERENCE_SUNDAY;
        assert_eq!(date(y, m, d).weekday(), Weekday::Sun);
    }
}
