use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Invalid grid dimensions")]
    InvalidDimensions,
    #[error("Coordinates out of range")]
    OutOfRange,
    #[error("Operation requires two distinct cells")]
    InvalidCellReference,
    #[error("Cell has no outward-facing side in that direction")]
    NotOnBoundary,
    #[error("Grid was already carved, generation needs a fresh grid")]
    AlreadyCarved,
}

pub type Result<T> = core::result::Result<T, MazeError>;
