//! Holiday oracle: which calendar dates are public holidays.
//!
//! The scheduler treats holidays as a pure lookup, resolved once per
//! generation for the full year span of the requested range. Freshness and
//! regional correctness are the oracle's responsibility; the scheduler does
//! not cache or invalidate.
//!
//! Three oracles ship with the crate:
//! - [`NoHolidays`] — the explicit empty set
//! - [`HolidayMap`] — a precomputed date → name mapping used directly
//! - [`HolidayTable`] — region-keyed fixed and annually recurring rules

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Failure to resolve the holiday set.
///
/// Propagated unchanged out of generation: a failed lookup is fatal
/// because the holiday set cannot be safely assumed empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HolidayError {
    /// The oracle has no rules for the requested region.
    #[error("unknown holiday region '{0}'")]
    UnknownRegion(String),

    /// An annual rule can never fall on a real calendar date.
    #[error("holiday rule '{name}' has an impossible date: month {month}, day {day}")]
    InvalidRule {
        /// Holiday name as configured.
        name: String,
        /// Configured month (1-12).
        month: u32,
        /// Configured day of month.
        day: u32,
    },
}

/// Resolved holiday set: calendar date → holiday name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayMap {
    dates: BTreeMap<NaiveDate, String>,
}

impl HolidayMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one dated holiday.
    pub fn with_holiday(mut self, date: NaiveDate, name: impl Into<String>) -> Self {
        self.dates.insert(date, name.into());
        self
    }

    /// Inserts one dated holiday.
    pub fn insert(&mut self, date: NaiveDate, name: impl Into<String>) {
        self.dates.insert(date, name.into());
    }

    /// Name of the holiday on `date`, if any.
    pub fn name_of(&self, date: NaiveDate) -> Option<&str> {
        self.dates.get(&date).map(String::as_str)
    }

    /// Whether `date` is a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains_key(&date)
    }

    /// Number of holidays in the map.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the map holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Source of truth for public holidays in a given region and year span.
pub trait HolidayOracle {
    /// Resolves the holiday set for `region` across `years` (inclusive).
    fn resolve(
        &self,
        region: &str,
        years: RangeInclusive<i32>,
    ) -> Result<HolidayMap, HolidayError>;
}

/// The explicit empty holiday set.
///
/// Generation never assumes "no holidays" silently; callers opt in with
/// this oracle.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayOracle for NoHolidays {
    fn resolve(
        &self,
        _region: &str,
        _years: RangeInclusive<i32>,
    ) -> Result<HolidayMap, HolidayError> {
        Ok(HolidayMap::new())
    }
}

/// A precomputed mapping serves as its own oracle, ignoring region and
/// year span.
impl HolidayOracle for HolidayMap {
    fn resolve(
        &self,
        _region: &str,
        _years: RangeInclusive<i32>,
    ) -> Result<HolidayMap, HolidayError> {
        Ok(self.clone())
    }
}

/// One holiday rule within a region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum HolidayRule {
    /// A single dated occurrence.
    Fixed { date: NaiveDate, name: String },
    /// Repeats every year on the same month and day.
    Annual { month: u32, day: u32, name: String },
}

/// Region-keyed table of fixed and annually recurring holidays.
///
/// Annual rules expand once per year in the resolved span. A rule on
/// Feb 29 simply has no occurrence in non-leap years; a rule that can
/// never fall on a real date (e.g. month 2, day 30) is an error.
///
/// # Example
///
/// ```
/// use u_rota::holidays::{HolidayOracle, HolidayTable};
///
/// let table = HolidayTable::new()
///     .with_annual("BR", 1, 1, "Confraternização Universal")
///     .with_annual("BR", 12, 25, "Natal");
///
/// let map = table.resolve("BR", 2025..=2026).unwrap();
/// assert_eq!(map.len(), 4);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HolidayTable {
    regions: HashMap<String, Vec<HolidayRule>>,
}

impl HolidayTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a one-off dated holiday to a region.
    pub fn with_fixed(
        mut self,
        region: impl Into<String>,
        date: NaiveDate,
        name: impl Into<String>,
    ) -> Self {
        self.regions
            .entry(region.into())
            .or_default()
            .push(HolidayRule::Fixed {
                date,
                name: name.into(),
            });
        self
    }

    /// Adds an annually recurring holiday (same month and day each year).
    pub fn with_annual(
        mut self,
        region: impl Into<String>,
        month: u32,
        day: u32,
        name: impl Into<String>,
    ) -> Self {
        self.regions
            .entry(region.into())
            .or_default()
            .push(HolidayRule::Annual {
                month,
                day,
                name: name.into(),
            });
        self
    }
}

impl HolidayOracle for HolidayTable {
    fn resolve(
        &self,
        region: &str,
        years: RangeInclusive<i32>,
    ) -> Result<HolidayMap, HolidayError> {
        let rules = self
            .regions
            .get(region)
            .ok_or_else(|| HolidayError::UnknownRegion(region.to_string()))?;

        let mut map = HolidayMap::new();
        for rule in rules {
            match rule {
                HolidayRule::Fixed { date, name } => {
                    if years.contains(&date.year()) {
                        map.insert(*date, name.clone());
                    }
                }
                HolidayRule::Annual { month, day, name } => {
                    for year in years.clone() {
                        match NaiveDate::from_ymd_opt(year, *month, *day) {
                            Some(date) => map.insert(date, name.clone()),
                            // Feb 29 has no occurrence in non-leap years
                            None if *month == 2 && *day == 29 => {}
                            None => {
                                return Err(HolidayError::InvalidRule {
                                    name: name.clone(),
                                    month: *month,
                                    day: *day,
                                });
                            }
                        }
                    }
                }
            }
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_no_holidays_is_empty() {
        let map = NoHolidays.resolve("BR", 2025..=2025).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_map_lookup() {
        let map = HolidayMap::new()
            .with_holiday(date(2025, 12, 25), "Natal")
            .with_holiday(date(2025, 1, 1), "Confraternização Universal");

        assert!(map.contains(date(2025, 12, 25)));
        assert_eq!(map.name_of(date(2025, 1, 1)), Some("Confraternização Universal"));
        assert_eq!(map.name_of(date(2025, 6, 2)), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_map_as_oracle() {
        let map = HolidayMap::new().with_holiday(date(2025, 12, 25), "Natal");
        let resolved = map.resolve("ignored", 2000..=2001).unwrap();
        assert_eq!(resolved, map);
    }

    #[test]
    fn test_table_annual_expands_per_year() {
        let table = HolidayTable::new().with_annual("BR", 12, 25, "Natal");
        let map = table.resolve("BR", 2024..=2026).unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map.name_of(date(2024, 12, 25)), Some("Natal"));
        assert_eq!(map.name_of(date(2025, 12, 25)), Some("Natal"));
        assert_eq!(map.name_of(date(2026, 12, 25)), Some("Natal"));
    }

    #[test]
    fn test_table_fixed_filtered_by_span() {
        let table = HolidayTable::new()
            .with_fixed("SP", date(2025, 7, 9), "Revolução Constitucionalista")
            .with_fixed("SP", date(2030, 7, 9), "Revolução Constitucionalista");

        let map = table.resolve("SP", 2025..=2026).unwrap();
        assert_eq!(map.len(), 1);
        assert!(map.contains(date(2025, 7, 9)));
    }

    #[test]
    fn test_table_unknown_region() {
        let table = HolidayTable::new().with_annual("BR", 12, 25, "Natal");
        let err = table.resolve("XX", 2025..=2025).unwrap_err();
        assert_eq!(err, HolidayError::UnknownRegion("XX".into()));
    }

    #[test]
    fn test_table_feb_29_leap_years_only() {
        let table = HolidayTable::new().with_annual("XY", 2, 29, "Leap Fest");
        let map = table.resolve("XY", 2023..=2024).unwrap();

        assert_eq!(map.len(), 1);
        assert!(map.contains(date(2024, 2, 29)));
    }

    #[test]
    fn test_table_impossible_rule() {
        let table = HolidayTable::new().with_annual("XY", 2, 30, "Never");
        let err = table.resolve("XY", 2025..=2025).unwrap_err();
        assert!(matches!(err, HolidayError::InvalidRule { day: 30, .. }));
    }

    #[test]
    fn test_regions_are_independent() {
        let table = HolidayTable::new()
            .with_annual("BR", 9, 7, "Independência do Brasil")
            .with_annual("SP", 1, 25, "Aniversário de São Paulo");

        let br = table.resolve("BR", 2025..=2025).unwrap();
        assert!(br.contains(date(2025, 9, 7)));
        assert!(!br.contains(date(2025, 1, 25)));
    }
}
