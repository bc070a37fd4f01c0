use crate::*;
pub use backtracker::*;

mod backtracker;

/// Outward sides tried, in order, when opening the entrance.
pub const ENTRANCE_SIDES: [Direction; 4] = [
    Direction::West,
    Direction::North,
    Direction::East,
    Direction::South,
];

/// Outward sides tried, in order, when opening the exit.
pub const EXIT_SIDES: [Direction; 4] = [
    Direction::East,
    Direction::South,
    Direction::West,
    Direction::North,
];

pub trait MazeGenerator {
    /// Carves a perfect maze into a fresh `grid`, opening one outward wall on `entrance` and one
    /// on `exit`. A grid without cells is left as is.
    fn generate(&mut self, grid: &mut Grid, entrance: Coord2, exit: Coord2) -> Result<()>;

    /// Same as [`MazeGenerator::generate`] with the entrance at the top-left corner and the exit
    /// at the bottom-right corner.
    fn generate_corners(&mut self, grid: &mut Grid) -> Result<()> {
        let (cols, rows) = grid.size();
        self.generate(grid, (0, 0), (cols - 1, rows - 1))
    }
}

/// Picks the wall to open for the entrance and the exit without touching the grid.
pub(crate) fn plan_openings(
    grid: &Grid,
    entrance: Coord2,
    exit: Coord2,
) -> Result<[(Coord2, Direction); 2]> {
    let entrance = grid.validate_coords(entrance)?;
    let exit = grid.validate_coords(exit)?;
    let entrance_side = grid
        .outward_side(entrance, &ENTRANCE_SIDES)
        .ok_or(MazeError::NotOnBoundary)?;
    let exit_side = grid
        .outward_side(exit, &EXIT_SIDES)
        .ok_or(MazeError::NotOnBoundary)?;
    Ok([(entrance, entrance_side), (exit, exit_side)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_open_left_and_right() {
        let grid = Grid::new(12, 10).unwrap();

        let openings = plan_openings(&grid, (0, 0), (11, 9)).unwrap();

        assert_eq!(openings, [((0, 0), Direction::West), ((11, 9), Direction::East)]);
    }

    #[test]
    fn single_cell_opens_both_sides() {
        let grid = Grid::new(1, 1).unwrap();

        let openings = plan_openings(&grid, (0, 0), (0, 0)).unwrap();

        assert_eq!(openings, [((0, 0), Direction::West), ((0, 0), Direction::East)]);
    }

    #[test]
    fn edge_cells_use_the_side_they_sit_on() {
        let grid = Grid::new(4, 4).unwrap();

        let openings = plan_openings(&grid, (2, 0), (1, 3)).unwrap();

        assert_eq!(openings, [((2, 0), Direction::North), ((1, 3), Direction::South)]);
    }

    #[test]
    fn rejects_interior_and_out_of_range_openings() {
        let grid = Grid::new(3, 3).unwrap();

        assert_eq!(plan_openings(&grid, (1, 1), (2, 2)), Err(MazeError::NotOnBoundary));
        assert_eq!(plan_openings(&grid, (0, 0), (1, 1)), Err(MazeError::NotOnBoundary));
        assert_eq!(plan_openings(&grid, (-1, 0), (2, 2)), Err(MazeError::OutOfRange));
        assert_eq!(plan_openings(&grid, (0, 0), (3, 2)), Err(MazeError::OutOfRange));
    }
}
