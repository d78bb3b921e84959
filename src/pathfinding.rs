//! A* search over the 4-connected grid.
//!
//! Edges cost 1 and the heuristic is Manhattan distance, so every returned
//! path is a shortest one. Open-set ties on `f` are broken by discovery
//! order (first pushed, first popped); this decides which of several
//! equally short paths comes back, never the length.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::trace;

use crate::grid::{GridSize, Position};
use crate::input::Direction;

/// Entry in the A* open set.
#[derive(Debug, Clone, Copy)]
struct OpenNode {
    position: Position,
    f_cost: u32,
    order: u64,
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.order == other.order
    }
}

impl Eq for OpenNode {}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys so `BinaryHeap` pops the lowest (f, order).
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds a shortest path from `start` to `goal`.
///
/// A cell is enterable when it is inside `bounds` and either absent from
/// `obstacles` or equal to `exception`. `start` itself is never checked.
/// The result runs from `start` to `goal` inclusive; an empty vector means
/// the goal is unreachable.
#[must_use]
pub fn find_path(
    bounds: GridSize,
    start: Position,
    goal: Position,
    obstacles: &HashSet<Position>,
    exception: Option<Position>,
) -> Vec<Position> {
    if start == goal {
        return vec![start];
    }

    let mut open_set = BinaryHeap::new();
    let mut closed: HashSet<Position> = HashSet::new();
    let mut came_from: HashMap<Position, Position> = HashMap::new();
    let mut g_scores: HashMap<Position, u32> = HashMap::new();
    let mut next_order = 0_u64;

    g_scores.insert(start, 0);
    open_set.push(OpenNode {
        position: start,
        f_cost: start.manhattan_distance(goal),
        order: next_order,
    });

    while let Some(current) = open_set.pop() {
        if current.position == goal {
            let path = reconstruct_path(&came_from, goal);
            trace!(length = path.len(), expanded = closed.len(), "path found");
            return path;
        }

        if !closed.insert(current.position) {
            continue;
        }

        let current_g = g_scores[&current.position];

        for neighbor in current.position.neighbors() {
            if !bounds.contains(neighbor) || closed.contains(&neighbor) {
                continue;
            }
            if obstacles.contains(&neighbor) && Some(neighbor) != exception {
                continue;
            }

            let tentative_g = current_g + 1;
            let improves = g_scores
                .get(&neighbor)
                .is_none_or(|&known_g| tentative_g < known_g);

            if improves {
                came_from.insert(neighbor, current.position);
                g_scores.insert(neighbor, tentative_g);

                next_order += 1;
                open_set.push(OpenNode {
                    position: neighbor,
                    f_cost: tentative_g + neighbor.manhattan_distance(goal),
                    order: next_order,
                });
            }
        }
    }

    trace!(expanded = closed.len(), "goal unreachable");
    Vec::new()
}

fn reconstruct_path(came_from: &HashMap<Position, Position>, goal: Position) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&previous) = came_from.get(&current) {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}

/// Direction of the first move along `path`, if it has one.
#[must_use]
pub fn first_step_direction(path: &[Position]) -> Option<Direction> {
    let [from, to, ..] = path else {
        return None;
    };

    Direction::from_delta(to.x - from.x, to.y - from.y)
}
