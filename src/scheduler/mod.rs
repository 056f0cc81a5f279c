//! Rota generation.
//!
//! [`RotaScheduler`] walks the requested date range one day at a time,
//! filters by weekday, consults the holiday oracle, and assigns people
//! and meeting types from two independent cyclic cursors.
//!
//! Generation is deterministic given a fixed roster order and holiday
//! set; the optional roster shuffle is a single seeded permutation
//! applied before cycling begins.

mod generator;

pub use generator::RotaScheduler;
