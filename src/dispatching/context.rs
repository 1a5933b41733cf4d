//! Disk state passed to seek policies.

use crate::models::{Cylinder, Direction};

/// Disk geometry and head state for one scheduling run.
///
/// The engine does not validate these values; see
/// [`validate_geometry`](crate::validation::validate_geometry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskContext {
    /// Current head position.
    pub head: Cylinder,
    /// Highest addressable cylinder.
    pub capacity: Cylinder,
    /// Initial travel direction (directional policies only).
    pub direction: Direction,
}

impl DiskContext {
    /// Creates a context with the head at `head`, travelling up.
    pub fn new(head: Cylinder, capacity: Cylinder) -> Self {
        Self {
            head,
            capacity,
            direction: Direction::Up,
        }
    }

    /// Sets the initial travel direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}
