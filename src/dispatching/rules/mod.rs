//! Built-in seek policies.
//!
//! # Categories
//!
//! - **Order-based**: FCFS
//! - **Greedy**: SSTF
//! - **Sweeping**: SCAN, C-SCAN, LOOK, C-LOOK (one parameterized [`Sweep`])
//!
//! # References
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2
//! - Denning (1967), "Effects of Scheduling on File Memory Operations"

use super::{DiskContext, SeekPolicy};
use crate::models::{Cylinder, Direction};

// ======================== Order-based ========================

/// First-Come-First-Served.
///
/// Serves requests exactly in input order. The baseline every other
/// policy is measured against.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl SeekPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn order(&self, pending: &[Cylinder], context: &DiskContext) -> Vec<Cylinder> {
        let mut visits = Vec::with_capacity(pending.len() + 1);
        visits.push(context.head);
        visits.extend_from_slice(pending);
        visits
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}

// ======================== Greedy ========================

/// Shortest Seek Time First.
///
/// Repeatedly moves to the unserved request nearest the current head.
/// Equidistant requests are broken by input order: the earliest one wins.
///
/// Served requests are tracked by index, so `pending` is only read.
#[derive(Debug, Clone, Copy)]
pub struct Sstf;

impl SeekPolicy for Sstf {
    fn name(&self) -> &'static str {
        "SSTF"
    }

    fn order(&self, pending: &[Cylinder], context: &DiskContext) -> Vec<Cylinder> {
        let mut served = vec![false; pending.len()];
        let mut visits = Vec::with_capacity(pending.len() + 1);
        let mut current = context.head;
        visits.push(current);

        // min_by_key returns the first of equal minima.
        while let Some((idx, &next)) = pending
            .iter()
            .enumerate()
            .filter(|(i, _)| !served[*i])
            .min_by_key(|&(_, &c)| c.abs_diff(current))
        {
            served[idx] = true;
            current = next;
            visits.push(next);
        }

        visits
    }

    fn description(&self) -> &'static str {
        "Shortest Seek Time First"
    }
}

// ======================== Sweeping ========================

/// The sweeping family: SCAN, C-SCAN, LOOK and C-LOOK.
///
/// Two switches select the variant:
///
/// | | reverse | jump (circular) |
/// |---|---|---|
/// | **to disk end** | SCAN | C-SCAN |
/// | **to last request** | LOOK | C-LOOK |
///
/// # Algorithm
/// 1. Dedupe and sort the requests.
/// 2. Split at the head: `upper` (>= head, ascending) and `lower`
///    (< head, nearest first).
/// 3. Serve the side in the initial direction.
/// 4. SCAN/C-SCAN: travel on to the physical end of the disk.
/// 5. Reversing variants serve the other side on the way back.
///    Circular variants (only if requests remain) jump to the other end
///    (C-SCAN visits it, C-LOOK does not) and serve the other side in the
///    original direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sweep {
    /// Travel to the physical disk end before turning.
    pub to_boundary: bool,
    /// Jump back and keep the original direction instead of reversing.
    pub circular: bool,
}

impl Sweep {
    /// Elevator algorithm.
    pub const SCAN: Sweep = Sweep {
        to_boundary: true,
        circular: false,
    };
    /// Circular SCAN.
    pub const C_SCAN: Sweep = Sweep {
        to_boundary: true,
        circular: true,
    };
    /// SCAN turning at the last request.
    pub const LOOK: Sweep = Sweep {
        to_boundary: false,
        circular: false,
    };
    /// Circular LOOK.
    pub const C_LOOK: Sweep = Sweep {
        to_boundary: false,
        circular: true,
    };
}

impl SeekPolicy for Sweep {
    fn name(&self) -> &'static str {
        match (self.to_boundary, self.circular) {
            (true, false) => "SCAN",
            (true, true) => "C-SCAN",
            (false, false) => "LOOK",
            (false, true) => "C-LOOK",
        }
    }

    fn order(&self, pending: &[Cylinder], context: &DiskContext) -> Vec<Cylinder> {
        let mut requests = pending.to_vec();
        requests.sort_unstable();
        requests.dedup();

        let split = requests.partition_point(|&r| r < context.head);
        let lower: Vec<Cylinder> = requests[..split].iter().rev().copied().collect();
        let upper: Vec<Cylinder> = requests[split..].to_vec();

        let direction = context.direction;
        let (first_pass, second_pass) = match direction {
            Direction::Up => (upper, lower),
            Direction::Down => (lower, upper),
        };

        let mut visits = Vec::with_capacity(requests.len() + 3);
        visits.push(context.head);
        visits.extend_from_slice(&first_pass);

        if self.to_boundary && !pending.is_empty() {
            push_unless_last(&mut visits, direction.limit(context.capacity));
        }

        if !self.circular {
            visits.extend(second_pass);
        } else if !second_pass.is_empty() {
            if self.to_boundary {
                push_unless_last(&mut visits, direction.reversed().limit(context.capacity));
            }
            let mut wrapped = second_pass;
            match direction {
                Direction::Up => wrapped.sort_unstable(),
                Direction::Down => wrapped.sort_unstable_by(|a, b| b.cmp(a)),
            }
            visits.extend(wrapped);
        }

        visits
    }

    fn description(&self) -> &'static str {
        match (self.to_boundary, self.circular) {
            (true, false) => "Elevator sweep to the disk end, then reverse",
            (true, true) => "Sweep to the disk end, jump to the other end, continue",
            (false, false) => "Sweep to the last request, then reverse",
            (false, true) => "Sweep to the last request, jump to the farthest one, continue",
        }
    }
}

fn push_unless_last(visits: &mut Vec<Cylinder>, cylinder: Cylinder) {
    if visits.last() != Some(&cylinder) {
        visits.push(cylinder);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(head: Cylinder, capacity: Cylinder, direction: Direction) -> DiskContext {
        DiskContext::new(head, capacity).with_direction(direction)
    }

    const TEXTBOOK: [Cylinder; 8] = [98, 183, 37, 122, 14, 124, 65, 67];

    #[test]
    fn test_fcfs_keeps_input_order() {
        let visits = Fcfs.order(&[50, 30, 90], &ctx(60, 199, Direction::Up));
        assert_eq!(visits, vec![60, 50, 30, 90]);
    }

    #[test]
    fn test_sstf_nearest_first() {
        let visits = Sstf.order(&TEXTBOOK, &ctx(53, 199, Direction::Up));
        assert_eq!(visits, vec![53, 65, 67, 37, 14, 98, 122, 124, 183]);
    }

    #[test]
    fn test_sstf_tie_goes_to_earlier_input() {
        let c = ctx(50, 100, Direction::Up);
        assert_eq!(Sstf.order(&[60, 40], &c), vec![50, 60, 40]);
        assert_eq!(Sstf.order(&[40, 60], &c), vec![50, 40, 60]);
    }

    #[test]
    fn test_sstf_does_not_touch_input() {
        let pending = vec![10, 20, 30];
        let first = Sstf.order(&pending, &ctx(25, 100, Direction::Up));
        let second = Sstf.order(&pending, &ctx(25, 100, Direction::Up));
        assert_eq!(pending, vec![10, 20, 30]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_scan_up_reaches_end() {
        let visits = Sweep::SCAN.order(&TEXTBOOK, &ctx(53, 199, Direction::Up));
        assert_eq!(visits, vec![53, 65, 67, 98, 122, 124, 183, 199, 37, 14]);
    }

    #[test]
    fn test_scan_down_reaches_zero() {
        let visits = Sweep::SCAN.order(&TEXTBOOK, &ctx(53, 199, Direction::Down));
        assert_eq!(visits, vec![53, 37, 14, 0, 65, 67, 98, 122, 124, 183]);
    }

    #[test]
    fn test_scan_goes_to_end_even_without_requests_ahead() {
        let visits = Sweep::SCAN.order(&[10], &ctx(60, 100, Direction::Up));
        assert_eq!(visits, vec![60, 100, 10]);
    }

    #[test]
    fn test_cscan_up_jumps_to_zero() {
        let visits = Sweep::C_SCAN.order(&TEXTBOOK, &ctx(53, 199, Direction::Up));
        assert_eq!(visits, vec![53, 65, 67, 98, 122, 124, 183, 199, 0, 14, 37]);
    }

    #[test]
    fn test_cscan_down_jumps_to_capacity() {
        let visits = Sweep::C_SCAN.order(&TEXTBOOK, &ctx(53, 199, Direction::Down));
        assert_eq!(
            visits,
            vec![53, 37, 14, 0, 199, 183, 124, 122, 98, 67, 65]
        );
    }

    #[test]
    fn test_cscan_no_jump_when_nothing_left() {
        let visits = Sweep::C_SCAN.order(&[60, 70], &ctx(50, 100, Direction::Up));
        assert_eq!(visits, vec![50, 60, 70, 100]);
    }

    #[test]
    fn test_look_turns_at_last_request() {
        let up = Sweep::LOOK.order(&TEXTBOOK, &ctx(53, 199, Direction::Up));
        assert_eq!(up, vec![53, 65, 67, 98, 122, 124, 183, 37, 14]);

        let down = Sweep::LOOK.order(&TEXTBOOK, &ctx(53, 199, Direction::Down));
        assert_eq!(down, vec![53, 37, 14, 65, 67, 98, 122, 124, 183]);
    }

    #[test]
    fn test_clook_wraps_without_boundary() {
        let up = Sweep::C_LOOK.order(&TEXTBOOK, &ctx(53, 199, Direction::Up));
        assert_eq!(up, vec![53, 65, 67, 98, 122, 124, 183, 14, 37]);

        let down = Sweep::C_LOOK.order(&TEXTBOOK, &ctx(53, 199, Direction::Down));
        assert_eq!(down, vec![53, 37, 14, 183, 124, 122, 98, 67, 65]);
    }

    #[test]
    fn test_sweep_collapses_duplicate_requests() {
        let visits = Sweep::LOOK.order(&[90, 90, 50, 50], &ctx(60, 100, Direction::Up));
        assert_eq!(visits, vec![60, 90, 50]);
    }

    #[test]
    fn test_request_at_head_counts_as_upper() {
        let visits = Sweep::LOOK.order(&[60, 40], &ctx(60, 100, Direction::Down));
        assert_eq!(visits, vec![60, 40, 60]);
    }

    #[test]
    fn test_names() {
        assert_eq!(Fcfs.name(), "FCFS");
        assert_eq!(Sstf.name(), "SSTF");
        assert_eq!(Sweep::SCAN.name(), "SCAN");
        assert_eq!(Sweep::C_SCAN.name(), "C-SCAN");
        assert_eq!(Sweep::LOOK.name(), "LOOK");
        assert_eq!(Sweep::C_LOOK.name(), "C-LOOK");
        assert_eq!(Sstf.description(), "Shortest Seek Time First");
    }
}
