//! Seeded random levels for benchmarks, property checks and demos

use crate::spatial::coordinate::GridCoordinate;
use crate::spatial::tiles::{TileKind, UserPlacement};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::HashSet;

// Gives up on filling dense requests after this many draws per placement
const ATTEMPTS_PER_PLACEMENT: usize = 16;

/// Scatter distinct user placements over the square `[-radius, radius]` on layer 0
///
/// Kinds are drawn uniformly from the user kinds. The result is fully
/// determined by the seed, and never holds more placements than there are
/// cells in the square.
pub fn scatter_placements(count: usize, radius: u32, seed: u64) -> Vec<UserPlacement> {
    let mut rng = StdRng::seed_from_u64(seed);
    let radius = i32::try_from(radius).unwrap_or(i32::MAX / 2);
    let side = u64::from(radius.unsigned_abs()) * 2 + 1;
    let capacity = usize::try_from(side * side).unwrap_or(usize::MAX);
    let target = count.min(capacity);

    let mut occupied = HashSet::with_capacity(target);
    let mut placements = Vec::with_capacity(target);

    for _ in 0..target.saturating_mul(ATTEMPTS_PER_PLACEMENT) {
        if placements.len() == target {
            break;
        }

        let coordinate = GridCoordinate::new(
            rng.random_range(-radius..=radius),
            0,
            rng.random_range(-radius..=radius),
        );
        let kind_index = rng.random_range(0..TileKind::USER_KINDS.len());

        if !occupied.insert(coordinate) {
            continue;
        }

        if let Some(&kind) = TileKind::USER_KINDS.get(kind_index) {
            if let Ok(placement) = UserPlacement::new(coordinate, kind) {
                placements.push(placement);
            }
        }
    }

    placements
}
