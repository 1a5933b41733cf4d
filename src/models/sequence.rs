//! Visit sequence (solution) model.
//!
//! A visit sequence is the ordered list of cylinders the head passes
//! through while serving a batch of requests. The head's starting
//! position is always the first element.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::Cylinder;

/// Ordered, duplicate-free list of visited cylinders, head first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitSequence(Vec<Cylinder>);

impl VisitSequence {
    /// Builds a sequence from raw visits, keeping only the first visit
    /// to each cylinder.
    pub fn from_visits(visits: impl IntoIterator<Item = Cylinder>) -> Self {
        let mut seen = HashSet::new();
        Self(visits.into_iter().filter(|c| seen.insert(*c)).collect())
    }

    /// A sequence containing only the head.
    pub fn head_only(head: Cylinder) -> Self {
        Self(vec![head])
    }

    /// Starting head position.
    pub fn head(&self) -> Option<Cylinder> {
        self.0.first().copied()
    }

    /// Last visited cylinder.
    pub fn last(&self) -> Option<Cylinder> {
        self.0.last().copied()
    }

    /// Number of visited cylinders, head included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of head moves (`len - 1`, 0 when empty).
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Cylinder visited at `step` (step 0 is the head).
    pub fn get(&self, step: usize) -> Option<Cylinder> {
        self.0.get(step).copied()
    }

    /// Visits as a slice.
    pub fn as_slice(&self) -> &[Cylinder] {
        &self.0
    }

    /// Distance travelled on each step.
    pub fn segment_distances(&self) -> Vec<u64> {
        self.0.windows(2).map(|w| w[0].abs_diff(w[1])).collect()
    }

    /// Consumes the sequence and returns the visits.
    pub fn into_vec(self) -> Vec<Cylinder> {
        self.0
    }
}

impl fmt::Display for VisitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" → ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Total head movement: sum of absolute distances between consecutive
/// visits. Zero for fewer than two visits. Saturates at `u64::MAX`.
pub fn total_movement(visits: &[Cylinder]) -> u64 {
    visits
        .windows(2)
        .map(|w| w[0].abs_diff(w[1]))
        .fold(0u64, u64::saturating_add)
}

/// Result of one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Cylinders in service order, head first.
    pub sequence: VisitSequence,
    /// Total head movement over the sequence.
    pub movement: u64,
}

impl ScheduleOutcome {
    /// Wraps a sequence, recomputing its movement.
    pub fn from_sequence(sequence: VisitSequence) -> Self {
        let movement = total_movement(sequence.as_slice());
        Self { sequence, movement }
    }

    /// Degenerate outcome: the head stays where it is.
    pub fn head_only(head: Cylinder) -> Self {
        Self {
            sequence: VisitSequence::head_only(head),
            movement: 0,
        }
    }

    /// Number of replay steps.
    pub fn steps(&self) -> usize {
        self.sequence.steps()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_first_visit() {
        let seq = VisitSequence::from_visits([60, 90, 100, 90, 50, 60]);
        assert_eq!(seq.as_slice(), &[60, 90, 100, 50]);
    }

    #[test]
    fn test_total_movement() {
        assert_eq!(total_movement(&[]), 0);
        assert_eq!(total_movement(&[42]), 0);
        assert_eq!(total_movement(&[60, 50, 30, 90]), 10 + 20 + 60);
    }

    #[test]
    fn test_total_movement_saturates() {
        let visits = [0, i64::MAX, 1, i64::MAX - 1];
        assert_eq!(total_movement(&visits), u64::MAX);
        assert_eq!(total_movement(&[i64::MIN, i64::MAX]), u64::MAX);
    }

    #[test]
    fn test_steps_and_segments() {
        let seq = VisitSequence::from_visits([50, 90, 10]);
        assert_eq!(seq.steps(), 2);
        assert_eq!(seq.segment_distances(), vec![40, 80]);
        assert_eq!(seq.head(), Some(50));
        assert_eq!(seq.last(), Some(10));
        assert_eq!(VisitSequence::default().steps(), 0);
    }

    #[test]
    fn test_display() {
        let seq = VisitSequence::from_visits([60, 50, 30]);
        assert_eq!(seq.to_string(), "60 → 50 → 30");
    }

    #[test]
    fn test_outcome_recomputes_movement() {
        let outcome = ScheduleOutcome::from_sequence(VisitSequence::from_visits([50, 90, 10]));
        assert_eq!(outcome.movement, 120);
        assert_eq!(outcome.steps(), 2);

        let idle = ScheduleOutcome::head_only(60);
        assert_eq!(idle.sequence.as_slice(), &[60]);
        assert_eq!(idle.movement, 0);
    }

    #[test]
    fn test_outcome_serde() {
        let outcome = ScheduleOutcome::from_sequence(VisitSequence::from_visits([60, 50]));
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"sequence":[60,50],"movement":10}"#);
        let back: ScheduleOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
    }
}
