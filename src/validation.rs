//! Input validation for schedule requests.
//!
//! Checks the request invariants before generation:
//! - the date range is not inverted
//! - the roster has at least one person
//! - the meeting-type cycle has at least one label
//!
//! All failures are reported before any entry is produced; generation has
//! no partial-success mode.

use crate::error::ScheduleError;
use crate::models::ScheduleRequest;

/// Validates a request, returning the first violated invariant.
///
/// Checks in order: date range, roster, meeting types.
pub fn validate_request(request: &ScheduleRequest) -> Result<(), ScheduleError> {
    if request.start_date > request.end_date {
        return Err(ScheduleError::InvalidRange {
            start: request.start_date,
            end: request.end_date,
        });
    }
    if request.roster.is_empty() {
        return Err(ScheduleError::EmptyRoster);
    }
    if request.meeting_types.is_empty() {
        return Err(ScheduleError::EmptyTypes);
    }
    Ok(())
}
