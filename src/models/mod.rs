//! Domain models for rota generation.
//!
//! Provides the core data types: the immutable [`ScheduleRequest`] input,
//! the ordered [`Rota`] output with its [`ScheduleEntry`] rows, and the
//! [`Cycle`] cursor that repeats the roster and meeting types indefinitely.

mod cycle;
mod request;
mod rota;

pub use cycle::{permute, Cycle};
pub use request::ScheduleRequest;
pub use rota::{Rota, ScheduleEntry, Slot, HOLIDAY_SENTINEL};
