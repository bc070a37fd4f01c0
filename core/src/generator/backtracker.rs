use alloc::vec::Vec;
use rand::prelude::*;
use smallvec::SmallVec;

use super::*;

/// Cell the depth-first carve always starts from.
pub const CARVE_START: Coord2 = (0, 0);

/// Randomized depth-first carve: walk into a random unvisited neighbor, knocking down the wall in
/// between, and back up whenever a cell has no unvisited neighbor left.
///
/// Candidates are recomputed on every step, so a fixed seed always yields the same maze for the
/// same grid size.
#[derive(Clone, Debug, PartialEq)]
pub struct RecursiveBacktracker<S = NullSink> {
    seed: u64,
    sink: S,
}

impl RecursiveBacktracker {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            sink: NullSink,
        }
    }

    pub fn from_config(config: &MazeConfig) -> Self {
        Self::new(config.resolved_seed())
    }
}

impl<S: RenderSink> RecursiveBacktracker<S> {
    pub fn with_sink<T: RenderSink>(self, sink: T) -> RecursiveBacktracker<T> {
        RecursiveBacktracker {
            seed: self.seed,
            sink,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Forwards a move between two distinct cells of `grid` to the sink.
    pub fn draw_move(&mut self, grid: &Grid, from: Coord2, to: Coord2, undo: bool) -> Result<()> {
        let from = grid.validate_coords(from)?;
        let to = grid.validate_coords(to)?;
        if from == to {
            return Err(MazeError::InvalidCellReference);
        }
        self.sink.on_move(from, to, undo);
        Ok(())
    }

    /// Returns the number of passages carved.
    fn carve(&mut self, grid: &mut Grid, start: Coord2, rng: &mut SmallRng) -> CellCount {
        let mut stack = Vec::with_capacity(grid.total_cells());
        let mut candidates: SmallVec<[(Direction, Coord2); 4]> = SmallVec::new();
        let mut carved = 0;

        grid.cell_mut(start).mark_visited();
        stack.push(start);

        while let Some(&current) = stack.last() {
            candidates.clear();
            candidates.extend(Direction::ALL.into_iter().filter_map(|dir| {
                let next = grid.neighbor(current, dir)?;
                (!grid[next].is_visited()).then_some((dir, next))
            }));

            if candidates.is_empty() {
                stack.pop();
                continue;
            }

            let (dir, next) = candidates[rng.random_range(0..candidates.len())];
            log::trace!("Carving {:?} from {:?} into {:?}", dir, current, next);
            grid.break_wall_pair(current, dir, next);
            self.sink.on_cell_changed(current, &grid[current]);
            self.sink.on_cell_changed(next, &grid[next]);

            grid.cell_mut(next).mark_visited();
            stack.push(next);
            carved += 1;
        }

        carved
    }
}

impl<S: RenderSink> MazeGenerator for RecursiveBacktracker<S> {
    fn generate(&mut self, grid: &mut Grid, entrance: Coord2, exit: Coord2) -> Result<()> {
        if grid.is_empty() {
            log::warn!("Grid {:?} has no cells, nothing to carve", grid.size());
            return Ok(());
        }

        let openings = plan_openings(grid, entrance, exit)?;
        if !grid.is_pristine() {
            return Err(MazeError::AlreadyCarved);
        }

        log::debug!(
            "Generating {:?} maze with seed {}, entrance {:?}, exit {:?}",
            grid.size(),
            self.seed,
            openings[0],
            openings[1]
        );

        for (coords, side) in openings {
            grid.open_boundary(coords, side)?;
            self.sink.on_cell_changed(coords, &grid[coords]);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let carved = self.carve(grid, CARVE_START, &mut rng);
        grid.reset_visited();

        // double check the spanning tree size
        let expected = grid.total_cells() - 1;
        if carved != expected {
            log::warn!(
                "Carved passage count mismatch, actual: {}, expected: {}",
                carved,
                expected
            );
        }
        log::debug!("Carved {} passages", carved);

        Ok(())
    }
}
