//! Side-by-side evaluation of every policy on one request batch.

use crate::dispatching::{schedule, DiskContext};
use crate::models::{Cylinder, Policy, ScheduleOutcome};

/// Runs every policy on `pending` and ranks them by total movement.
///
/// Ties keep [`Policy::ALL`] order (the sort is stable).
///
/// # Example
/// ```
/// use u_disk_schedule::dispatching::DiskContext;
/// use u_disk_schedule::models::Policy;
/// use u_disk_schedule::scheduler::compare_policies;
///
/// let ranked = compare_policies(&[98, 183, 37, 122, 14, 124, 65, 67], &DiskContext::new(53, 199));
/// assert_eq!(ranked.len(), 6);
/// assert_eq!(ranked.last().unwrap().0, Policy::Fcfs);
/// ```
pub fn compare_policies(
    pending: &[Cylinder],
    context: &DiskContext,
) -> Vec<(Policy, ScheduleOutcome)> {
    let mut ranked: Vec<(Policy, ScheduleOutcome)> = Policy::ALL
        .iter()
        .map(|&policy| (policy, schedule(pending, context, policy)))
        .collect();
    ranked.sort_by_key(|(_, outcome)| outcome.movement);
    ranked
}
