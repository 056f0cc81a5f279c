//! The schedule-generation algorithm.
//!
//! # Algorithm
//!
//! 1. Validate the request (range, roster, meeting types).
//! 2. Normalize roster order: one seeded permutation if shuffling.
//! 3. Resolve the holiday set for the full year span via the oracle.
//! 4. Walk every date from start to end inclusive:
//!    - weekday not in the filter → no entry, no cursor advance;
//!    - holiday with skipping on → nothing at all;
//!    - holiday with skipping off → holiday row, cursors untouched;
//!    - otherwise → assignment row consuming one value from each cursor.
//!
//! Cursor advancement is tied exclusively to assignment rows: recorded
//! holidays and filtered-out weekdays never consume a rotation slot.
//!
//! # Complexity
//! O(days in range).

use log::{debug, trace};
use rand::Rng;

use crate::error::ScheduleError;
use crate::holidays::HolidayOracle;
use crate::models::{permute, Cycle, Rota, ScheduleEntry, ScheduleRequest};
use crate::validation::validate_request;

/// Holiday-aware rotating-roster scheduler.
///
/// Owns a [`HolidayOracle`]; everything else arrives per call in the
/// [`ScheduleRequest`].
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use u_rota::holidays::NoHolidays;
/// use u_rota::models::ScheduleRequest;
/// use u_rota::scheduler::RotaScheduler;
///
/// let request = ScheduleRequest::new(
///     NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 6).unwrap(),
/// )
/// .with_weekday(Weekday::Mon)
/// .with_person("Ana")
/// .with_meeting_type("Lab meeting");
///
/// let rota = RotaScheduler::new(NoHolidays).generate(&request).unwrap();
/// assert_eq!(rota.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RotaScheduler<O> {
    oracle: O,
}

impl<O: HolidayOracle> RotaScheduler<O> {
    /// Creates a scheduler backed by the given holiday oracle.
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Generates the ordered rota for `request`.
    ///
    /// Fails atomically before producing any entry: an inverted range, an
    /// empty roster or type cycle, or an oracle failure yields an error
    /// and no partial output.
    pub fn generate(&self, request: &ScheduleRequest) -> Result<Rota, ScheduleError> {
        validate_request(request)?;

        let roster = if request.shuffle_roster {
            let seed = request.shuffle_seed.unwrap_or_else(|| rand::rng().random());
            debug!("shuffling roster of {} with seed {seed}", request.roster.len());
            permute(&request.roster, seed)
        } else {
            request.roster.clone()
        };

        let holidays = self
            .oracle
            .resolve(&request.holiday_region, request.years())?;
        debug!(
            "resolved {} holidays for region '{}' over {:?}",
            holidays.len(),
            request.holiday_region,
            request.years()
        );

        let mut people = Cycle::new(roster);
        let mut types = Cycle::new(request.meeting_types.clone());
        let mut rota = Rota::new();

        for date in request.days() {
            if !request.qualifies(date) {
                continue;
            }
            match holidays.name_of(date) {
                Some(name) if request.skip_holidays => {
                    trace!("skipping holiday {date} ({name})");
                }
                Some(name) => {
                    // Recorded holidays are not assignments: cursors stay put.
                    rota.push(ScheduleEntry::holiday(date, name));
                }
                None => {
                    rota.push(ScheduleEntry::assignment(date, people.next(), types.next()));
                }
            }
        }

        debug!(
            "generated {} entries ({} assignments, {} holiday rows)",
            rota.len(),
            rota.assignment_count(),
            rota.holiday_count()
        );
        Ok(rota)
    }
}
