use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;

use crate::*;

/// Rectangular collection of cells addressed by `(col, row)`.
///
/// The grid is the only owner of its cells and the only place walls can be broken in pairs, so
/// a wall on one side of a shared edge is present exactly when the wall on the other side is.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Fails with `InvalidDimensions` for negative sizes and for sizes whose cells cannot be
    /// allocated.
    pub fn new(cols: Coord, rows: Coord) -> Result<Self> {
        if cols < 0 || rows < 0 {
            return Err(MazeError::InvalidDimensions);
        }

        let shape = (cols, rows).to_nd_index();
        let total = shape[0]
            .checked_mul(shape[1])
            .ok_or(MazeError::InvalidDimensions)?;

        let mut storage = Vec::new();
        storage
            .try_reserve_exact(total)
            .map_err(|_| MazeError::InvalidDimensions)?;
        storage.resize(total, Cell::new());

        let cells =
            Array2::from_shape_vec(shape, storage).map_err(|_| MazeError::InvalidDimensions)?;
        Ok(Self { cells })
    }

    pub fn from_config(config: &MazeConfig) -> Result<Self> {
        let (cols, rows) = config.size;
        Self::new(cols, rows)
    }

    pub fn size(&self) -> Coord2 {
        let (cols, rows) = self.cells.dim();
        // dimensions came from `Coord` values in `new`
        (cols as Coord, rows as Coord)
    }

    pub fn cols(&self) -> Coord {
        self.size().0
    }

    pub fn rows(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, (col, row): Coord2) -> bool {
        let (cols, rows) = self.size();
        (0..cols).contains(&col) && (0..rows).contains(&row)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(MazeError::OutOfRange)
        }
    }

    /// Adjacent cell in `dir`, or `None` when either end falls outside the grid.
    pub fn neighbor(&self, coords: Coord2, dir: Direction) -> Option<Coord2> {
        if !self.contains(coords) {
            return None;
        }
        apply_delta(coords, dir.delta(), self.size())
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    pub fn is_open(&self, coords: Coord2, dir: Direction) -> Result<bool> {
        Ok(!self.cell_at(coords)?.has_wall(dir))
    }

    /// Removes the wall between a cell and its neighbor in `dir`, on both cells.
    ///
    /// Returns the neighbor's coordinates. Nothing is mutated when the neighbor does not exist.
    pub fn carve_passage(&mut self, coords: Coord2, dir: Direction) -> Result<Coord2> {
        let coords = self.validate_coords(coords)?;
        let next = self.neighbor(coords, dir).ok_or(MazeError::OutOfRange)?;
        self.break_wall_pair(coords, dir, next);
        Ok(next)
    }

    /// Removes an outward-facing wall, only valid on a side without a neighbor.
    pub fn open_boundary(&mut self, coords: Coord2, dir: Direction) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        if self.neighbor(coords, dir).is_some() {
            return Err(MazeError::NotOnBoundary);
        }
        self.cell_mut(coords).break_wall(dir);
        Ok(())
    }

    /// First side in `preference` that faces outside the grid.
    pub fn outward_side(&self, coords: Coord2, preference: &[Direction]) -> Option<Direction> {
        if !self.contains(coords) {
            return None;
        }
        preference
            .iter()
            .copied()
            .find(|&dir| self.neighbor(coords, dir).is_none())
    }

    /// Neighbors reachable from `coords` through an open wall.
    pub fn passages(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + '_ {
        let walls = self
            .cell_at(coords)
            .map(|cell| cell.walls())
            .unwrap_or(Walls::all());
        Direction::ALL
            .into_iter()
            .filter(move |dir| !walls.contains(dir.wall()))
            .filter_map(move |dir| self.neighbor(coords, dir))
    }

    /// Number of broken wall pairs between cells, boundary openings excluded.
    pub fn internal_passage_count(&self) -> CellCount {
        self.iter()
            .map(|(coords, cell)| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|&dir| !cell.has_wall(dir) && self.neighbor(coords, dir).is_some())
                    .count()
            })
            .sum()
    }

    /// Counts the cells connected to `coords` through open walls, `coords` included.
    pub fn reachable_from(&self, coords: Coord2) -> Result<CellCount> {
        let coords = self.validate_coords(coords)?;
        let mut seen: Array2<bool> = Array2::default(self.cells.raw_dim());
        let mut to_visit = VecDeque::from([coords]);
        seen[coords.to_nd_index()] = true;
        let mut count = 0;

        while let Some(visit_coords) = to_visit.pop_front() {
            count += 1;
            for next in self.passages(visit_coords) {
                if !seen[next.to_nd_index()] {
                    seen[next.to_nd_index()] = true;
                    to_visit.push_back(next);
                }
            }
        }

        Ok(count)
    }

    /// True while no wall anywhere has been broken.
    pub fn is_pristine(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_enclosed())
    }

    /// All cells with their coordinates, one column after another.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((col, row), cell)| ((col as Coord, row as Coord), cell))
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    /// Both ends must already be validated and adjacent through `dir`.
    pub(crate) fn break_wall_pair(&mut self, coords: Coord2, dir: Direction, next: Coord2) {
        self.cell_mut(coords).break_wall(dir);
        self.cell_mut(next).break_wall(dir.opposite());
    }

    pub(crate) fn reset_visited(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear_visited);
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
