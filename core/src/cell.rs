use bitflags::bitflags;

use crate::*;

bitflags! {
    /// Set of walls still standing around a cell.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Walls: u8 {
        const NORTH = 1 << 0;
        const EAST = 1 << 1;
        const SOUTH = 1 << 2;
        const WEST = 1 << 3;
    }
}

impl Direction {
    pub const fn wall(self) -> Walls {
        match self {
            Direction::North => Walls::NORTH,
            Direction::East => Walls::EAST,
            Direction::South => Walls::SOUTH,
            Direction::West => Walls::WEST,
        }
    }
}

/// A single grid unit. Knows nothing about its position or its neighbors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    walls: Walls,
    visited: bool,
}

impl Cell {
    pub const fn new() -> Self {
        Self {
            walls: Walls::all(),
            visited: false,
        }
    }

    pub const fn walls(self) -> Walls {
        self.walls
    }

    pub const fn has_wall(self, dir: Direction) -> bool {
        self.walls.contains(dir.wall())
    }

    pub fn break_wall(&mut self, dir: Direction) {
        self.walls.remove(dir.wall());
    }

    pub const fn is_enclosed(self) -> bool {
        self.walls.is_all()
    }

    /// Generation-time marker, always false once a generator returns.
    pub const fn is_visited(self) -> bool {
        self.visited
    }

    pub(crate) fn mark_visited(&mut self) {
        self.visited = true;
    }

    pub(crate) fn clear_visited(&mut self) {
        self.visited = false;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_fully_walled_and_unvisited() {
        let cell = Cell::default();

        assert!(cell.is_enclosed());
        assert!(!cell.is_visited());
        for dir in Direction::ALL {
            assert!(cell.has_wall(dir));
        }
    }

    #[test]
    fn break_wall_only_clears_that_side() {
        let mut cell = Cell::new();

        cell.break_wall(Direction::East);

        assert!(!cell.has_wall(Direction::East));
        assert!(cell.has_wall(Direction::North));
        assert!(cell.has_wall(Direction::South));
        assert!(cell.has_wall(Direction::West));
        assert_eq!(cell.walls(), Walls::NORTH | Walls::SOUTH | Walls::WEST);
    }

    #[test]
    fn break_wall_is_idempotent() {
        let mut cell = Cell::new();

        cell.break_wall(Direction::West);
        cell.break_wall(Direction::West);

        assert_eq!(cell.walls(), Walls::all() - Walls::WEST);
    }
}
