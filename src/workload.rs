//! Random request workloads.
//!
//! Generates request batches for demos and randomized checks. Callers
//! pass their own RNG so runs can be seeded and reproduced.

use rand::Rng;

use crate::models::Cylinder;

/// Draws `count` cylinders uniformly from `[0, capacity]`.
///
/// Returns an empty batch when `capacity` is negative.
pub fn random_queue<R: Rng>(rng: &mut R, count: usize, capacity: Cylinder) -> Vec<Cylinder> {
    if capacity < 0 {
        return Vec::new();
    }
    (0..count).map(|_| rng.random_range(0..=capacity)).collect()
}

/// Renders requests as the comma-separated text accepted by
/// [`compute`](crate::dispatching::compute).
pub fn format_queue(requests: &[Cylinder]) -> String {
    requests
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
