//! Schedule request model.
//!
//! The immutable input to [`RotaScheduler`](crate::scheduler::RotaScheduler):
//! a date range, a weekday filter, a roster, a meeting-type cycle, and
//! holiday options. Invariants (start ≤ end, non-empty roster and meeting
//! types) are checked by
//! [`validate_request`](crate::validation::validate_request) before any
//! entry is produced.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// A request for one generated rota.
///
/// Build with [`ScheduleRequest::new`] and the `with_*` methods; the
/// request is treated as immutable once handed to the scheduler.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use u_rota::models::ScheduleRequest;
///
/// let request = ScheduleRequest::new(
///     NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
/// )
/// .with_weekdays(vec![Weekday::Tue, Weekday::Thu])
/// .with_person("Ana")
/// .with_person("Bruno")
/// .with_meeting_type("Lab meeting")
/// .with_meeting_type("Journal club")
/// .with_region("BR");
///
/// assert!(request.qualifies(NaiveDate::from_ymd_opt(2025, 1, 7).unwrap()));
/// assert_eq!(request.years(), 2025..=2025);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// First date of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last date of the range (inclusive).
    pub end_date: NaiveDate,
    /// Weekdays on which meetings may be scheduled.
    pub weekdays: Vec<Weekday>,
    /// People eligible for assignment, in rotation order.
    pub roster: Vec<String>,
    /// Meeting-type labels to alternate through.
    pub meeting_types: Vec<String>,
    /// Whether to apply a single randomized permutation to the roster
    /// before cycling begins.
    pub shuffle_roster: bool,
    /// Seed for the roster permutation. `None` draws one from the thread
    /// RNG; set it for reproducible output.
    pub shuffle_seed: Option<u64>,
    /// Whether holiday dates are dropped entirely (`true`) or recorded
    /// as holiday rows (`false`).
    pub skip_holidays: bool,
    /// Region identifier passed through to the holiday oracle.
    pub holiday_region: String,
}

impl ScheduleRequest {
    /// Creates a request for the inclusive range `start_date..=end_date`.
    ///
    /// Holiday skipping defaults to on; shuffling defaults to off. The
    /// weekday filter starts empty, so add weekdays before generating or
    /// the rota will contain no entries.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            weekdays: Vec::new(),
            roster: Vec::new(),
            meeting_types: Vec::new(),
            shuffle_roster: false,
            shuffle_seed: None,
            skip_holidays: true,
            holiday_region: String::new(),
        }
    }

    /// Replaces the weekday filter.
    pub fn with_weekdays(mut self, weekdays: Vec<Weekday>) -> Self {
        self.weekdays = weekdays;
        self
    }

    /// Adds one weekday to the filter.
    pub fn with_weekday(mut self, weekday: Weekday) -> Self {
        self.weekdays.push(weekday);
        self
    }

    /// Replaces the roster.
    pub fn with_roster(mut self, roster: Vec<String>) -> Self {
        self.roster = roster;
        self
    }

    /// Adds one person to the end of the roster.
    pub fn with_person(mut self, person: impl Into<String>) -> Self {
        self.roster.push(person.into());
        self
    }

    /// Replaces the meeting-type cycle.
    pub fn with_meeting_types(mut self, meeting_types: Vec<String>) -> Self {
        self.meeting_types = meeting_types;
        self
    }

    /// Adds one meeting-type label to the cycle.
    pub fn with_meeting_type(mut self, label: impl Into<String>) -> Self {
        self.meeting_types.push(label.into());
        self
    }

    /// Enables the initial roster shuffle.
    pub fn with_shuffle(mut self) -> Self {
        self.shuffle_roster = true;
        self
    }

    /// Enables the roster shuffle with a fixed seed, for reproducibility.
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_roster = true;
        self.shuffle_seed = Some(seed);
        self
    }

    /// Sets whether holiday dates are skipped or recorded.
    pub fn with_skip_holidays(mut self, skip: bool) -> Self {
        self.skip_holidays = skip;
        self
    }

    /// Sets the holiday region identifier.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.holiday_region = region.into();
        self
    }

    /// Whether `date`'s weekday is in the filter.
    #[inline]
    pub fn qualifies(&self, date: NaiveDate) -> bool {
        self.weekdays.contains(&date.weekday())
    }

    /// Iterates every date of the range, start to end inclusive.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end_date;
        self.start_date.iter_days().take_while(move |d| *d <= end)
    }

    /// The inclusive span of years covered by the range.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.start_date.year()..=self.end_date.year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_request_builder() {
        let request = ScheduleRequest::new(date(2025, 1, 1), date(2025, 12, 31))
            .with_weekday(Weekday::Mon)
            .with_weekday(Weekday::Wed)
            .with_person("Ana")
            .with_meeting_type("Lab meeting")
            .with_shuffle_seed(99)
            .with_skip_holidays(false)
            .with_region("SP");

        assert_eq!(request.weekdays, vec![Weekday::Mon, Weekday::Wed]);
        assert_eq!(request.roster, vec!["Ana".to_string()]);
        assert_eq!(request.meeting_types, vec!["Lab meeting".to_string()]);
        assert!(request.shuffle_roster);
        assert_eq!(request.shuffle_seed, Some(99));
        assert!(!request.skip_holidays);
        assert_eq!(request.holiday_region, "SP");
    }

    #[test]
    fn test_request_defaults() {
        let request = ScheduleRequest::new(date(2025, 1, 1), date(2025, 1, 31));
        assert!(request.skip_holidays);
        assert!(!request.shuffle_roster);
        assert!(request.weekdays.is_empty());
        assert!(request.roster.is_empty());
    }

    #[test]
    fn test_qualifies() {
        let request = ScheduleRequest::new(date(2025, 6, 1), date(2025, 6, 30))
            .with_weekdays(vec![Weekday::Tue, Weekday::Thu]);

        assert!(request.qualifies(date(2025, 6, 3))); // Tuesday
        assert!(request.qualifies(date(2025, 6, 5))); // Thursday
        assert!(!request.qualifies(date(2025, 6, 2))); // Monday
        assert!(!request.qualifies(date(2025, 6, 7))); // Saturday
    }

    #[test]
    fn test_days_inclusive() {
        let request = ScheduleRequest::new(date(2025, 2, 27), date(2025, 3, 2));
        let days: Vec<NaiveDate> = request.days().collect();
        assert_eq!(
            days,
            vec![
                date(2025, 2, 27),
                date(2025, 2, 28),
                date(2025, 3, 1),
                date(2025, 3, 2),
            ]
        );
    }

    #[test]
    fn test_days_single_date() {
        let request = ScheduleRequest::new(date(2025, 6, 2), date(2025, 6, 2));
        assert_eq!(request.days().count(), 1);
    }

    #[test]
    fn test_years_span() {
        let request = ScheduleRequest::new(date(2024, 11, 1), date(2026, 2, 1));
        assert_eq!(request.years(), 2024..=2026);
    }
}
