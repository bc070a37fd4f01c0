use std::io;

use anyhow::Context;
use clap::Parser;
use mazer_core::{Grid, MazeGenerator, RecursiveBacktracker};

use options::{Args, FileConfig, Settings};
use render::{AnimatedSink, render_text};

mod options;
mod render;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(&args, file)?;
    let mut grid = Grid::from_config(&settings.maze)?;
    let mut generator = RecursiveBacktracker::from_config(&settings.maze);
    log::info!(
        "Generating {}x{} maze with seed {}",
        grid.cols(),
        grid.rows(),
        generator.seed()
    );

    match settings.animate {
        Some(delay) => {
            let sink = AnimatedSink::new(io::stdout(), grid.size(), settings.cell_width, delay);
            let mut generator = generator.with_sink(sink);
            generator.generate_corners(&mut grid)?;
            generator
                .into_sink()
                .finish()
                .context("failed to draw animation frame")?;
        }
        None => {
            generator.generate_corners(&mut grid)?;
            print!(
                "{}",
                render_text(grid.size(), settings.cell_width, |coords| grid[coords].walls())
            );
        }
    }

    Ok(())
}
