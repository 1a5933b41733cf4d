//! Recomputation request.
//!
//! Bundles the five inputs of one engine run so they can be loaded from
//! any serde format. Missing fields fall back to the classic textbook
//! workload (head 53 on a 200-cylinder disk).

use serde::{Deserialize, Serialize};

use crate::dispatching::compute;
use crate::models::{Cylinder, Direction, ScheduleOutcome};
use crate::validation::{validate_geometry, ValidationResult};

/// Inputs for one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputeRequest {
    /// Comma-separated pending cylinders.
    pub queue: String,
    /// Starting head position.
    pub head: Cylinder,
    /// Highest addressable cylinder.
    pub capacity: Cylinder,
    /// Policy name (e.g., "SSTF", "C-LOOK"). Unknown names schedule nothing.
    pub policy: String,
    /// Initial direction for sweeping policies.
    pub direction: Direction,
}

impl Default for ComputeRequest {
    fn default() -> Self {
        Self {
            queue: "98, 183, 37, 122, 14, 124, 65, 67".to_string(),
            head: 53,
            capacity: 199,
            policy: "FCFS".to_string(),
            direction: Direction::Up,
        }
    }
}

impl ComputeRequest {
    /// Creates a request for `queue` with default geometry.
    pub fn new(queue: impl Into<String>) -> Self {
        Self {
            queue: queue.into(),
            ..Default::default()
        }
    }

    /// Sets the head position.
    pub fn with_head(mut self, head: Cylinder) -> Self {
        self.head = head;
        self
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: Cylinder) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the policy name.
    pub fn with_policy(mut self, policy: impl Into<String>) -> Self {
        self.policy = policy.into();
        self
    }

    /// Sets the initial direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Checks head and capacity.
    pub fn validate(&self) -> ValidationResult {
        validate_geometry(self.head, self.capacity)
    }

    /// Runs the engine.
    pub fn run(&self) -> ScheduleOutcome {
        compute(
            &self.queue,
            self.head,
            self.capacity,
            &self.policy,
            self.direction,
        )
    }
}
