//! Move selection for AUTO mode.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{GridSize, Position};
use crate::input::Direction;
use crate::pathfinding::{find_path, first_step_direction};
use crate::snake::Snake;

/// Outcome of one autopilot decision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoMove {
    /// Direction to request; `None` keeps the current facing.
    pub direction: Option<Direction>,
    /// Path that was searched for this decision; empty when none was found.
    pub path: Vec<Position>,
}

/// Chooses the next move towards `food`.
///
/// Follows the first step of an A* path that treats the body as obstacles
/// and the tail as passable. Without a usable path, falls back to
/// [`safe_random_move`].
pub fn plan_move<R: Rng + ?Sized>(
    rng: &mut R,
    snake: &Snake,
    food: Position,
    bounds: GridSize,
) -> AutoMove {
    let path = find_path(
        bounds,
        snake.head(),
        food,
        &snake.occupied_cells(),
        Some(snake.tail()),
    );

    let direction =
        first_step_direction(&path).or_else(|| safe_random_move(rng, snake, bounds));

    AutoMove { direction, path }
}

/// Picks uniformly among directions whose target cell is on the grid and is
/// either free or the current tail.
pub fn safe_random_move<R: Rng + ?Sized>(
    rng: &mut R,
    snake: &Snake,
    bounds: GridSize,
) -> Option<Direction> {
    let head = snake.head();
    let tail = snake.tail();
    let candidates: Vec<Direction> = Direction::ALL
        .into_iter()
        .filter(|direction| {
            let next = head.step(*direction);
            bounds.contains(next) && (next == tail || !snake.occupies(next))
        })
        .collect();

    candidates.choose(rng).copied()
}
