//! Seek performance indicators.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total movement | Sum of \|Δ\| over all steps |
//! | Steps | Number of head moves (`len - 1`) |
//! | Average seek | Total movement / steps |
//! | Maximum seek | Largest single move |
//! | Direction changes | Reversals between consecutive non-zero moves |
//!
//! # Reference
//! Teorey & Pinkerton (1972), "A Comparative Analysis of Disk Scheduling Policies"

use std::cmp::Ordering;

use crate::models::{Policy, ScheduleOutcome};

/// Seek statistics for one schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct SeekKpi {
    /// Total head movement (cylinders).
    pub total_movement: u64,
    /// Number of head moves.
    pub steps: usize,
    /// Mean movement per step (0.0 when there are no steps).
    pub average_seek: f64,
    /// Largest single move (cylinders).
    pub max_seek: u64,
    /// How often the head reverses direction.
    pub direction_changes: usize,
}

impl SeekKpi {
    /// Computes KPIs from a schedule outcome.
    pub fn calculate(outcome: &ScheduleOutcome) -> Self {
        let seq = outcome.sequence.as_slice();
        let distances = outcome.sequence.segment_distances();
        let steps = distances.len();
        let max_seek = distances.iter().copied().max().unwrap_or(0);

        let average_seek = if steps == 0 {
            0.0
        } else {
            outcome.movement as f64 / steps as f64
        };

        // Directions of the non-zero moves; a reversal is a flip.
        let signs: Vec<Ordering> = seq
            .windows(2)
            .map(|w| w[1].cmp(&w[0]))
            .filter(|s| *s != Ordering::Equal)
            .collect();
        let direction_changes = signs.windows(2).filter(|p| p[0] != p[1]).count();

        Self {
            total_movement: outcome.movement,
            steps,
            average_seek,
            max_seek,
            direction_changes,
        }
    }

    /// One-line summary in the form shown by the statistics panel.
    pub fn summary(&self, policy: Policy, outcome: &ScheduleOutcome) -> String {
        format!(
            "{policy}: {} (movement {}, {} steps, avg {:.2})",
            outcome.sequence, self.total_movement, self.steps, self.average_seek
        )
    }
}
