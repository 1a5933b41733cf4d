//! Scheduling engine entry points.
//!
//! [`compute`] is the fail-soft entry used by interactive callers: it
//! takes the raw request text and a policy name and never fails.
//! [`schedule`] is the typed form for callers that already hold
//! sanitized requests and a [`Policy`].

use super::rules::{Fcfs, Sstf, Sweep};
use super::{DiskContext, SeekPolicy};
use crate::models::{Cylinder, Direction, Policy, ScheduleOutcome, VisitSequence};
use crate::validation::sanitize_queue;

/// Returns the built-in implementation of `policy`.
pub fn policy_rule(policy: Policy) -> &'static dyn SeekPolicy {
    match policy {
        Policy::Fcfs => &Fcfs,
        Policy::Sstf => &Sstf,
        Policy::Scan => &Sweep::SCAN,
        Policy::CScan => &Sweep::C_SCAN,
        Policy::Look => &Sweep::LOOK,
        Policy::CLook => &Sweep::C_LOOK,
    }
}

/// Orders `pending` under `policy`.
///
/// Requests are expected to be in `[0, context.capacity]` already (see
/// [`sanitize_queue`]). An empty request list yields the head-only
/// outcome without running the policy. Repeat visits are collapsed to
/// the first one and the movement is computed from the final sequence.
pub fn schedule(pending: &[Cylinder], context: &DiskContext, policy: Policy) -> ScheduleOutcome {
    if pending.is_empty() {
        return ScheduleOutcome::head_only(context.head);
    }

    let rule = policy_rule(policy);
    let visits = rule.order(pending, context);
    let outcome = ScheduleOutcome::from_sequence(VisitSequence::from_visits(visits));

    tracing::trace!(
        policy = rule.name(),
        pending = pending.len(),
        steps = outcome.steps(),
        movement = outcome.movement,
        "scheduled requests"
    );

    outcome
}

/// Computes the service order for a raw request list.
///
/// `raw_queue` is comma-separated; malformed and out-of-range tokens are
/// dropped. An unknown `policy` name, or no surviving requests, yields
/// `[head]` with zero movement.
///
/// # Example
/// ```
/// use u_disk_schedule::dispatching::compute;
/// use u_disk_schedule::models::Direction;
///
/// let outcome = compute("10,90", 50, 100, "C-LOOK", Direction::Up);
/// assert_eq!(outcome.sequence.as_slice(), &[50, 90, 10]);
///
/// let idle = compute("50", 60, 100, "XYZ", Direction::Up);
/// assert_eq!(idle.sequence.as_slice(), &[60]);
/// assert_eq!(idle.movement, 0);
/// ```
pub fn compute(
    raw_queue: &str,
    head: Cylinder,
    capacity: Cylinder,
    policy: &str,
    direction: Direction,
) -> ScheduleOutcome {
    let pending = sanitize_queue(raw_queue, capacity);
    if pending.is_empty() {
        return ScheduleOutcome::head_only(head);
    }

    let policy = match policy.parse::<Policy>() {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(error = %e, "falling back to head-only schedule");
            return ScheduleOutcome::head_only(head);
        }
    };

    let context = DiskContext::new(head, capacity).with_direction(direction);
    schedule(&pending, &context, policy)
}
