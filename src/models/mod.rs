//! Disk scheduling domain models.
//!
//! Provides the core data types for describing a batch of cylinder
//! requests and the service order produced for it.
//!
//! # Domain Mappings
//!
//! | u-disk-schedule | Disk controller | Elevator |
//! |-----------------|-----------------|----------|
//! | Cylinder | Track position | Floor |
//! | Direction | Arm travel direction | Car direction |
//! | Policy | I/O scheduler | Dispatch strategy |
//! | VisitSequence | Service order | Stop list |

mod cylinder;
mod policy;
mod sequence;

pub use cylinder::{Cylinder, Direction, ParseDirectionError};
pub use policy::{ParsePolicyError, Policy};
pub use sequence::{total_movement, ScheduleOutcome, VisitSequence};
