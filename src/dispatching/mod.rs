//! Seek policies and the scheduling engine.
//!
//! Each policy turns a pending request list and a [`DiskContext`] into
//! the raw order in which the head visits cylinders. The engine picks
//! the policy, collapses repeat visits, and totals the head movement.
//!
//! # Usage
//!
//! ```
//! use u_disk_schedule::dispatching::compute;
//! use u_disk_schedule::models::Direction;
//!
//! let outcome = compute("50,30,90", 60, 199, "SSTF", Direction::Up);
//! assert_eq!(outcome.sequence.as_slice(), &[60, 50, 30, 90]);
//! assert_eq!(outcome.movement, 90);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2
//! - Teorey & Pinkerton (1972), "A Comparative Analysis of Disk Scheduling Policies"

mod context;
mod engine;
pub mod rules;

pub use context::DiskContext;
pub use engine::{compute, policy_rule, schedule};

use crate::models::Cylinder;
use std::fmt::Debug;

/// A disk scheduling policy that orders pending requests.
///
/// Implementations are pure: they read `pending` and build their own
/// working copies, so the same request slice can be reused across calls
/// and threads.
pub trait SeekPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "SSTF", "C-LOOK").
    fn name(&self) -> &'static str;

    /// Returns the cylinders visited, head first.
    ///
    /// `pending` is non-empty and already range-checked. The returned
    /// visits may repeat a cylinder; the engine keeps only first visits.
    fn order(&self, pending: &[Cylinder], context: &DiskContext) -> Vec<Cylinder>;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
