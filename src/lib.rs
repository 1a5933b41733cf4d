//! Disk head scheduling for the U-Engine ecosystem.
//!
//! Computes the order in which a disk arm serves a batch of pending
//! cylinder requests under the classical policies (FCFS, SSTF, SCAN,
//! C-SCAN, LOOK, C-LOOK), together with the total head movement.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Cylinder`, `Direction`, `Policy`,
//!   `VisitSequence`, `ScheduleOutcome`
//! - **`validation`**: Request-text sanitization and geometry checks
//! - **`dispatching`**: Seek policies and the `compute` / `schedule` engine
//! - **`scheduler`**: Seek KPIs, step-through replay, policy comparison
//! - **`config`**: Serde-loadable `ComputeRequest`
//! - **`workload`**: Seeded random request batches
//!
//! # Architecture
//!
//! The engine is a set of pure functions: no I/O, no shared state, and
//! caller-owned request lists are only ever read. Rendering and animation
//! pacing are left to the caller.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11
//! - Teorey & Pinkerton (1972), "A Comparative Analysis of Disk Scheduling Policies"
//! - Worthington, Ganger & Patt (1994), "Scheduling Algorithms for Modern Disk Drives"

pub mod config;
pub mod dispatching;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

#[cfg(test)]
mod testing;
