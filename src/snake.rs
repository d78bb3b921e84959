use std::collections::{HashSet, VecDeque};

use crate::grid::{GridSize, Position};
use crate::input::Direction;

/// Segments in a freshly reset snake.
pub const INITIAL_LENGTH: usize = 3;

/// Mutable snake body, facing and pending growth.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    facing: Direction,
    growth_pending: u32,
}

impl Snake {
    /// Creates the start layout: three horizontal cells with the head on the
    /// grid centre, facing right.
    #[must_use]
    pub fn centered(bounds: GridSize) -> Self {
        let head = bounds.center();
        let body = (0..INITIAL_LENGTH)
            .map(|offset| Position {
                x: head.x - offset as i32,
                y: head.y,
            })
            .collect();

        Self {
            body,
            facing: Direction::Right,
            growth_pending: 0,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, facing: Direction) -> Self {
        assert!(!segments.is_empty(), "snake body must not be empty");

        Self {
            body: VecDeque::from(segments),
            facing,
            growth_pending: 0,
        }
    }

    /// Queues one segment of growth, applied on the next step.
    pub fn mark_growth(&mut self) {
        self.growth_pending += 1;
    }

    /// Resolves the requested direction and advances one cell.
    ///
    /// `None` or a reversal (while longer than one segment) keeps the current
    /// facing. Pending growth keeps the tail in place for this step.
    pub fn step(&mut self, requested: Option<Direction>) {
        if let Some(direction) = requested {
            let reverses = direction == self.facing.opposite() && self.body.len() > 1;
            if !reverses {
                self.facing = direction;
            }
        }

        let next_head = self.head().step(self.facing);
        self.body.push_front(next_head);

        if self.growth_pending > 0 {
            self.growth_pending -= 1;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Returns true when `position` is off the grid or on a non-head segment.
    #[must_use]
    pub fn collides_at(&self, position: Position, bounds: GridSize) -> bool {
        if !bounds.contains(position) {
            return true;
        }

        self.body.iter().skip(1).any(|segment| *segment == position)
    }

    /// Collision check for the current head.
    #[must_use]
    pub fn collides(&self, bounds: GridSize) -> bool {
        self.collides_at(self.head(), bounds)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Returns the last segment.
    #[must_use]
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Set of every occupied cell.
    #[must_use]
    pub fn occupied_cells(&self) -> HashSet<Position> {
        self.body.iter().copied().collect()
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn facing(&self) -> Direction {
        self.facing
    }

    #[must_use]
    pub fn growth_pending(&self) -> u32 {
        self.growth_pending
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
