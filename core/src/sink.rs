use crate::*;

/// Receives notifications while a maze is being carved.
///
/// Notifications are one-way: a sink only ever sees copies and shared references, it cannot
/// influence the topology of the maze.
pub trait RenderSink {
    /// Called after a wall of the cell at `coords` was broken.
    fn on_cell_changed(&mut self, coords: Coord2, cell: &Cell);

    /// Called for a move between two distinct cells, `undo` marks a move being taken back.
    fn on_move(&mut self, from: Coord2, to: Coord2, undo: bool) {
        let _ = (from, to, undo);
    }
}

/// Sink that ignores every notification.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn on_cell_changed(&mut self, _coords: Coord2, _cell: &Cell) {}
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn on_cell_changed(&mut self, coords: Coord2, cell: &Cell) {
        (**self).on_cell_changed(coords, cell)
    }

    fn on_move(&mut self, from: Coord2, to: Coord2, undo: bool) {
        (**self).on_move(from, to, undo)
    }
}
