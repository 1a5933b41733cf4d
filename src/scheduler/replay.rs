//! Step-through replay of a visit sequence.
//!
//! Holds the cursor state a visualizer needs to walk a schedule one head
//! move at a time. Pacing (timers, frame delays) belongs to the caller.

use crate::models::{Cylinder, ScheduleOutcome};

/// Cursor over a computed schedule.
///
/// Step 0 shows the head at its starting position; step `max_steps`
/// shows the last visit.
///
/// # Example
/// ```
/// use u_disk_schedule::dispatching::compute;
/// use u_disk_schedule::models::Direction;
/// use u_disk_schedule::scheduler::Replay;
///
/// let mut replay = Replay::new(compute("50,30,90", 60, 199, "FCFS", Direction::Up));
/// assert!(replay.step_forward());
/// assert_eq!(replay.current_head(), Some(50));
/// assert_eq!(replay.remaining(), &[30, 90]);
/// assert_eq!(replay.traversed_movement(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct Replay {
    outcome: ScheduleOutcome,
    current_step: usize,
}

impl Replay {
    /// Starts a replay at step 0.
    pub fn new(outcome: ScheduleOutcome) -> Self {
        Self {
            outcome,
            current_step: 0,
        }
    }

    /// The schedule being replayed.
    pub fn outcome(&self) -> &ScheduleOutcome {
        &self.outcome
    }

    /// Current step index.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Index of the last step.
    pub fn max_steps(&self) -> usize {
        self.outcome.steps()
    }

    /// Head position at the current step.
    pub fn current_head(&self) -> Option<Cylinder> {
        self.outcome.sequence.get(self.current_step)
    }

    /// Cylinders still to be visited after the current step.
    pub fn remaining(&self) -> &[Cylinder] {
        let seq = self.outcome.sequence.as_slice();
        seq.get(self.current_step + 1..).unwrap_or(&[])
    }

    /// Head movement from the start up to the current step.
    pub fn traversed_movement(&self) -> u64 {
        self.outcome
            .sequence
            .segment_distances()
            .iter()
            .take(self.current_step)
            .fold(0u64, |acc, d| acc.saturating_add(*d))
    }

    /// Per-step distances, as drawn on each segment of the chart.
    pub fn segment_distances(&self) -> Vec<u64> {
        self.outcome.sequence.segment_distances()
    }

    /// Whether the last step has been reached.
    pub fn is_finished(&self) -> bool {
        self.current_step >= self.max_steps()
    }

    /// Whether a forward step is possible.
    pub fn can_step_forward(&self) -> bool {
        !self.is_finished()
    }

    /// Whether a backward step is possible.
    pub fn can_step_backward(&self) -> bool {
        self.current_step > 0
    }

    /// Advances one step. Returns `false` at the end.
    pub fn step_forward(&mut self) -> bool {
        if self.can_step_forward() {
            self.current_step += 1;
            true
        } else {
            false
        }
    }

    /// Goes back one step. Returns `false` at the start.
    pub fn step_backward(&mut self) -> bool {
        if self.can_step_backward() {
            self.current_step -= 1;
            true
        } else {
            false
        }
    }

    /// Returns to step 0.
    pub fn reset(&mut self) {
        self.current_step = 0;
    }

    /// Rewinds to step 0 if the replay already finished, so playback can
    /// start over.
    pub fn play_from_start_if_finished(&mut self) {
        if self.is_finished() {
            self.reset();
        }
    }
}

impl Iterator for Replay {
    type Item = Cylinder;

    /// Advances and yields the newly reached cylinder.
    fn next(&mut self) -> Option<Cylinder> {
        if self.step_forward() {
            self.current_head()
        } else {
            None
        }
    }
}
