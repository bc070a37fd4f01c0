/// Single coordinate axis used for grid width, height, and positions.
///
/// Signed so that caller-supplied negative positions can be rejected instead of wrapping.
pub type Coord = i32;

/// Count type used for cell and passage totals.
pub type CellCount = usize;

/// Two-dimensional coordinates `(col, row)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    /// Only meaningful for validated, non-negative coordinates.
    fn to_nd_index(self) -> Self::Output {
        [self.0 as usize, self.1 as usize]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Fixed enumeration order, candidate directions are always collected in this order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const fn opposite(self) -> Self {
        use Direction::*;
        match self {
            North => South,
            East => West,
            South => North,
            West => East,
        }
    }

    /// Offset as `(dcol, drow)`, rows grow downwards.
    pub const fn delta(self) -> (Coord, Coord) {
        use Direction::*;
        match self {
            North => (0, -1),
            East => (1, 0),
            South => (0, 1),
            West => (-1, 0),
        }
    }
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
pub(crate) fn apply_delta(coords: Coord2, delta: (Coord, Coord), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add(dx)?;
    if !(0..max_x).contains(&next_x) {
        return None;
    }

    let next_y = y.checked_add(dy)?;
    if !(0..max_y).contains(&next_y) {
        return None;
    }

    Some((next_x, next_y))
}
