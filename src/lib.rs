//! Rotating-roster meeting scheduler.
//!
//! Assigns recurring meeting slots (weekly lab meetings, journal clubs,
//! on-call reviews) to a rotating roster of people over a date range,
//! skipping or flagging public holidays, and hands the ordered result to
//! a tabular exporter.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ScheduleRequest`, `Rota`, `ScheduleEntry`,
//!   `Slot`, `Cycle`
//! - **`holidays`**: Holiday oracle trait plus map- and table-backed oracles
//! - **`scheduler`**: The generation algorithm (`RotaScheduler`)
//! - **`validation`**: Input integrity checks (date range, empty roster/types)
//! - **`export`**: Delimited-text rendering with localized weekday names
//!
//! # Example
//!
//! ```
//! use chrono::{NaiveDate, Weekday};
//! use u_rota::holidays::NoHolidays;
//! use u_rota::models::ScheduleRequest;
//! use u_rota::scheduler::RotaScheduler;
//!
//! let request = ScheduleRequest::new(
//!     NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
//! )
//! .with_weekdays(vec![Weekday::Tue, Weekday::Thu])
//! .with_roster(vec!["Ana".into(), "Bruno".into(), "Carla".into()])
//! .with_meeting_types(vec!["Lab meeting".into(), "Journal club".into()]);
//!
//! let rota = RotaScheduler::new(NoHolidays).generate(&request).unwrap();
//! assert_eq!(rota.assignment_count(), 4);
//! ```

pub mod error;
pub mod export;
pub mod holidays;
pub mod models;
pub mod scheduler;
pub mod validation;
