//! The review-year window every analyzer filters against.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Closed interval `[start, end]` in epoch seconds covering one calendar
/// year in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisYearWindow {
    pub year: i32,
    pub start: i64,
    pub end: i64,
}

impl AnalysisYearWindow {
    /// Year reviewed when nothing else is configured.
    pub const DEFAULT_YEAR: i32 = 2025;

    /// Window for `year`, from Jan 1 00:00:00 to Dec 31 23:59:59 UTC.
    ///
    /// Returns `None` for years chrono cannot represent.
    pub fn for_year(year: i32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)?
            .and_hms_opt(0, 0, 0)?
            .and_utc()
            .timestamp();
        let end = NaiveDate::from_ymd_opt(year, 12, 31)?
            .and_hms_opt(23, 59, 59)?
            .and_utc()
            .timestamp();
        Some(Self { year, start, end })
    }

    /// Whether `timestamp` falls inside the window (both ends inclusive).
    pub fn contains(&self, timestamp: i64) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }
}

impl Default for AnalysisYearWindow {
    fn default() -> Self {
        // 2025-01-01T00:00:00Z .. 2025-12-31T23:59:59Z
        Self {
            year: Self::DEFAULT_YEAR,
            start: 1_735_689_600,
            end: 1_767_225_599,
        }
    }
}

/// UTC date-time for an epoch-seconds timestamp.
///
/// Timestamps chrono cannot represent collapse to the epoch, which is never
/// inside a review window.
pub fn utc_datetime(timestamp: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(timestamp, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

/// Calendar month (1-12) of a timestamp in UTC.
pub fn utc_month(timestamp: i64) -> u32 {
    utc_datetime(timestamp).month()
}
