#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use sink::*;
pub use types::*;

mod cell;
mod error;
mod generator;
mod grid;
mod sink;
mod types;

pub const DEFAULT_SIZE: Coord2 = (12, 10);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub size: Coord2,
    pub seed: Option<u64>,
}

impl MazeConfig {
    pub const fn new_unchecked(size: Coord2, seed: Option<u64>) -> Self {
        Self { size, seed }
    }

    pub fn new(size: Coord2, seed: Option<u64>) -> Result<Self> {
        let (cols, rows) = size;
        if cols < 0 || rows < 0 {
            return Err(MazeError::InvalidDimensions);
        }
        Ok(Self::new_unchecked(size, seed))
    }

    pub fn total_cells(&self) -> CellCount {
        let (cols, rows) = self.size;
        let [cols, rows] = (cols.max(0), rows.max(0)).to_nd_index();
        cols.saturating_mul(rows)
    }

    /// The configured seed, or a fresh process-random one when none was given.
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_SIZE, None)
    }
}
