//! Consumers of engine output: statistics, replay and comparison.
//!
//! The engine produces a [`ScheduleOutcome`](crate::models::ScheduleOutcome);
//! this module turns it into what a visualizer shows.
//!
//! # KPI
//!
//! `SeekKpi` computes total and average seek, the largest single move, and
//! the number of direction reversals.
//!
//! # Replay
//!
//! `Replay` is a cursor that steps forward and backward through the visit
//! sequence, exposing the current head, remaining visits and distance
//! travelled so far.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2
//! - Worthington, Ganger & Patt (1994), "Scheduling Algorithms for Modern Disk Drives"

mod compare;
mod kpi;
mod replay;

pub use compare::compare_policies;
pub use kpi::SeekKpi;
pub use replay::Replay;
