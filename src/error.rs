//! Error taxonomy for schedule generation.
//!
//! Every variant is a caller configuration error: all are raised before
//! any entry is produced, so generation either fully succeeds or fails
//! atomically. There is no retry or partial-success mode, and messages
//! are suitable for surfacing to the caller directly.

use chrono::NaiveDate;
use thiserror::Error;

use crate::holidays::HolidayError;

/// Errors reported by [`RotaScheduler::generate`](crate::scheduler::RotaScheduler::generate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The requested date range is inverted.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// Requested start date.
        start: NaiveDate,
        /// Requested end date.
        end: NaiveDate,
    },

    /// The roster has no people to rotate over.
    #[error("roster is empty: at least one person is required")]
    EmptyRoster,

    /// The meeting-type cycle has no labels.
    #[error("meeting types are empty: at least one label is required")]
    EmptyTypes,

    /// The holiday oracle failed. Propagated unchanged and never retried:
    /// the holiday set cannot be safely assumed empty.
    #[error("holiday lookup failed: {0}")]
    HolidayLookup(#[from] HolidayError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ScheduleError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2025, 5, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date range: start 2025-05-10 is after end 2025-05-01"
        );

        assert!(ScheduleError::EmptyRoster.to_string().contains("roster"));
        assert!(ScheduleError::EmptyTypes.to_string().contains("meeting types"));
    }

    #[test]
    fn test_holiday_error_conversion() {
        let err: ScheduleError = HolidayError::UnknownRegion("XX".into()).into();
        assert!(matches!(err, ScheduleError::HolidayLookup(_)));
        assert!(err.to_string().contains("XX"));
    }
}
