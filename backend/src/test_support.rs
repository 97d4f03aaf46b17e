//! Shared test doubles for service and adapter unit tests.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to a single instant.
pub struct FixtureClock(DateTime<Utc>);

impl FixtureClock {
    /// Clock pinned to 09:00 UTC on `day`.
    pub fn on(day: NaiveDate) -> Self {
        let now = day
            .and_hms_opt(9, 0, 0)
            .map(|naive| Utc.from_utc_datetime(&naive))
            .unwrap_or_else(|| panic!("valid fixture time on {day}"));
        Self(now)
    }
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Calendar day helper for 2025 fixtures.
pub fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap_or_else(|| panic!("valid June day {day}"))
}
