use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{GridSize, Position};

/// Picks a cell uniformly at random among those not in `occupied`.
///
/// Returns `None` when `occupied` covers the whole grid.
#[must_use]
pub fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    occupied: &HashSet<Position>,
) -> Option<Position> {
    let candidates: Vec<Position> = bounds
        .cells()
        .filter(|position| !occupied.contains(position))
        .collect();

    candidates.choose(rng).copied()
}
