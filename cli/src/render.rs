use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

use crossterm::QueueableCommand;
use crossterm::cursor::MoveTo;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use mazer_core::{Cell, Coord2, RenderSink, ToNdIndex, Walls};
use ndarray::Array2;

/// Draws a grid of `size` cells as text, asking `walls_at` for the walls of each cell.
///
/// Every cell contributes its north and west walls, the last column adds its east walls and the
/// last row adds its south walls.
pub fn render_text(size: Coord2, cell_width: usize, walls_at: impl Fn(Coord2) -> Walls) -> String {
    let (cols, rows) = size;
    let mut out = String::new();
    if cols <= 0 || rows <= 0 {
        return out;
    }

    let wall = "-".repeat(cell_width);
    let gap = " ".repeat(cell_width);

    for row in 0..rows {
        for col in 0..cols {
            let walls = walls_at((col, row));
            out.push('+');
            out.push_str(if walls.contains(Walls::NORTH) { &wall } else { &gap });
        }
        out.push_str("+\n");

        for col in 0..cols {
            let walls = walls_at((col, row));
            out.push(if walls.contains(Walls::WEST) { '|' } else { ' ' });
            out.push_str(&gap);
        }
        let last = walls_at((cols - 1, row));
        out.push(if last.contains(Walls::EAST) { '|' } else { ' ' });
        out.push('\n');
    }

    for col in 0..cols {
        out.push('+');
        let walls = walls_at((col, rows - 1));
        out.push_str(if walls.contains(Walls::SOUTH) { &wall } else { &gap });
    }
    out.push_str("+\n");

    out
}

/// Redraws the whole maze after every notification, pacing frames with `delay`.
///
/// Keeps its own copy of the walls, the grid being carved stays with the generator.
pub struct AnimatedSink<W: Write> {
    out: W,
    shadow: Array2<Walls>,
    size: Coord2,
    cell_width: usize,
    delay: Duration,
    error: Option<io::Error>,
}

impl<W: Write> AnimatedSink<W> {
    pub fn new(out: W, size: Coord2, cell_width: usize, delay: Duration) -> Self {
        Self {
            out,
            shadow: Array2::from_elem(size.to_nd_index(), Walls::all()),
            size,
            cell_width,
            delay,
            error: None,
        }
    }

    /// Hands back the writer, or the first error hit while drawing.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }

    fn redraw(&mut self) -> io::Result<()> {
        let frame = render_text(self.size, self.cell_width, |coords| {
            self.shadow[coords.to_nd_index()]
        });
        self.out
            .queue(Clear(ClearType::All))?
            .queue(MoveTo(0, 0))?
            .queue(Print(frame))?;
        self.out.flush()
    }
}

impl<W: Write> RenderSink for AnimatedSink<W> {
    fn on_cell_changed(&mut self, coords: Coord2, cell: &Cell) {
        self.shadow[coords.to_nd_index()] = cell.walls();

        // stop drawing after the first failure, carving carries on
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.redraw() {
            log::warn!("Animation stopped: {}", err);
            self.error = Some(err);
            return;
        }
        thread::sleep(self.delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::{Grid, MazeGenerator, RecursiveBacktracker};

    #[test]
    fn single_enclosed_cell() {
        let text = render_text((1, 1), 3, |_| Walls::all());

        assert_eq!(text, "+---+\n|   |\n+---+\n");
    }

    #[test]
    fn empty_grid_renders_nothing() {
        assert_eq!(render_text((0, 0), 3, |_| Walls::all()), "");
        assert_eq!(render_text((4, 0), 3, |_| Walls::all()), "");
    }

    #[test]
    fn generated_row_shows_openings() {
        let mut grid = Grid::new(2, 1).unwrap();
        RecursiveBacktracker::new(0)
            .generate_corners(&mut grid)
            .unwrap();

        let text = render_text(grid.size(), 1, |coords| grid[coords].walls());

        assert_eq!(text, "+-+-+\n     \n+-+-+\n");
    }

    #[test]
    fn animation_ends_on_the_final_layout() {
        let mut grid = Grid::new(4, 3).unwrap();
        let sink = AnimatedSink::new(Vec::new(), grid.size(), 2, Duration::ZERO);
        let mut generator = RecursiveBacktracker::new(5).with_sink(sink);

        generator.generate_corners(&mut grid).unwrap();
        let out = generator.into_sink().finish().unwrap();

        let out = String::from_utf8(out).unwrap();
        let expected = render_text(grid.size(), 2, |coords| grid[coords].walls());
        assert!(out.ends_with(&expected));
    }
}
