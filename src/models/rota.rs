//! Rota (output schedule) model.
//!
//! A rota is the ordered sequence of entries produced by one generation
//! run: one entry per qualifying date that is either an assignment or a
//! recorded holiday. It is append-only during generation and never
//! mutated after return.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Assignee column value used for recorded holiday rows.
pub const HOLIDAY_SENTINEL: &str = "HOLIDAY";

/// What occupies one qualifying date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Slot {
    /// A normal meeting day: one person, one meeting type.
    Assignment {
        /// Person drawn from the roster cycle.
        assignee: String,
        /// Label drawn from the meeting-type cycle.
        meeting_type: String,
    },
    /// A public holiday recorded instead of skipped.
    Holiday {
        /// Human-readable holiday name from the oracle.
        name: String,
    },
}

/// One row of the generated schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Calendar date of this row.
    pub date: NaiveDate,
    /// Weekday of `date`. Localized naming is the exporter's concern.
    pub weekday: Weekday,
    /// Assignment or recorded holiday.
    pub slot: Slot,
}

impl ScheduleEntry {
    /// Creates an assignment entry.
    pub fn assignment(
        date: NaiveDate,
        assignee: impl Into<String>,
        meeting_type: impl Into<String>,
    ) -> Self {
        Self {
            date,
            weekday: date.weekday(),
            slot: Slot::Assignment {
                assignee: assignee.into(),
                meeting_type: meeting_type.into(),
            },
        }
    }

    /// Creates a recorded-holiday entry.
    pub fn holiday(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            weekday: date.weekday(),
            slot: Slot::Holiday { name: name.into() },
        }
    }

    /// Whether this row records a holiday.
    #[inline]
    pub fn is_holiday(&self) -> bool {
        matches!(self.slot, Slot::Holiday { .. })
    }

    /// Assignee column value: the person, or [`HOLIDAY_SENTINEL`].
    pub fn assignee(&self) -> &str {
        match &self.slot {
            Slot::Assignment { assignee, .. } => assignee,
            Slot::Holiday { .. } => HOLIDAY_SENTINEL,
        }
    }

    /// Meeting-type column value: the label, or `Holiday (<name>)`.
    pub fn meeting_label(&self) -> String {
        match &self.slot {
            Slot::Assignment { meeting_type, .. } => meeting_type.clone(),
            Slot::Holiday { name } => format!("Holiday ({name})"),
        }
    }
}

/// An ordered, generated schedule.
///
/// Entries are in ascending date order — the natural iteration order of
/// generation. Query helpers never mutate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rota {
    /// Entries in ascending date order.
    pub entries: Vec<ScheduleEntry>,
}

impl Rota {
    /// Creates an empty rota.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry. Used during generation; entries arrive in date order.
    pub fn push(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Number of entries (assignments plus recorded holidays).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the rota has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in date order.
    pub fn iter(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.iter()
    }

    /// Finds the entry for a given date.
    pub fn entry_for_date(&self, date: NaiveDate) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// Iterates assignment rows only.
    pub fn assignments(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.iter().filter(|e| !e.is_holiday())
    }

    /// Iterates recorded-holiday rows only.
    pub fn holiday_rows(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.iter().filter(|e| e.is_holiday())
    }

    /// Number of assignment rows.
    pub fn assignment_count(&self) -> usize {
        self.assignments().count()
    }

    /// Number of recorded-holiday rows.
    pub fn holiday_count(&self) -> usize {
        self.holiday_rows().count()
    }

    /// Returns all entries assigned to a given person.
    pub fn entries_for_assignee(&self, person: &str) -> Vec<&ScheduleEntry> {
        self.assignments().filter(|e| e.assignee() == person).collect()
    }
}
