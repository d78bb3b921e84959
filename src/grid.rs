use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position one cell away in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns the four axis-aligned neighbours, unfiltered for bounds.
    ///
    /// Order follows [`Direction::ALL`].
    #[must_use]
    pub fn neighbors(self) -> [Self; 4] {
        Direction::ALL.map(|direction| self.step(direction))
    }

    /// Manhattan distance between two cells.
    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Returns true when `position` lies inside the grid.
    #[must_use]
    pub fn contains(self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < i32::from(self.width)
            && position.y < i32::from(self.height)
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Iterates every cell, row by row.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        let width = i32::from(self.width);
        (0..i32::from(self.height)).flat_map(move |y| (0..width).map(move |x| Position { x, y }))
    }

    /// Cell the snake head starts on after a reset.
    #[must_use]
    pub fn center(self) -> Position {
        Position {
            x: i32::from(self.width / 2),
            y: i32::from(self.height / 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GridSize, Position};

    #[test]
    fn bounds_are_half_open() {
        let grid = GridSize::new(28, 20);

        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(27, 19)));
        assert!(!grid.contains(Position::new(-1, 0)));
        assert!(!grid.contains(Position::new(0, -1)));
        assert!(!grid.contains(Position::new(28, 0)));
        assert!(!grid.contains(Position::new(0, 20)));
    }

    #[test]
    fn neighbors_are_unit_offsets_and_unfiltered() {
        let neighbors = Position::new(0, 0).neighbors();

        assert_eq!(
            neighbors,
            [
                Position::new(0, -1),
                Position::new(0, 1),
                Position::new(-1, 0),
                Position::new(1, 0),
            ]
        );
        for neighbor in neighbors {
            assert_eq!(neighbor.manhattan_distance(Position::new(0, 0)), 1);
        }
    }

    #[test]
    fn cells_cover_grid_exactly_once() {
        let grid = GridSize::new(5, 3);
        let cells: Vec<Position> = grid.cells().collect();

        assert_eq!(cells.len(), grid.total_cells());
        assert_eq!(cells.first(), Some(&Position::new(0, 0)));
        assert_eq!(cells.last(), Some(&Position::new(4, 2)));
        assert!(cells.iter().all(|cell| grid.contains(*cell)));
    }

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Position::new(2, 7);
        let b = Position::new(-3, 1);

        assert_eq!(a.manhattan_distance(b), 11);
        assert_eq!(b.manhattan_distance(a), 11);
    }

    #[test]
    fn default_grid_center() {
        assert_eq!(GridSize::new(28, 20).center(), Position::new(14, 10));
        assert_eq!(GridSize::new(8, 1).center(), Position::new(4, 0));
    }
}
