use std::{fs, path::Path, path::PathBuf, time::Duration};

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use mazer_core::{Coord, MazeConfig};
use serde::Deserialize;

pub const DEFAULT_CELL_WIDTH: usize = 3;

/// Generate a perfect maze and draw it in the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
pub struct Args {
    /// Number of columns
    #[arg(long)]
    pub cols: Option<Coord>,

    /// Number of rows
    #[arg(long)]
    pub rows: Option<Coord>,

    /// Random seed, a random one is picked when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Characters used for the inside of each cell
    #[arg(long)]
    pub cell_width: Option<usize>,

    /// Redraw after every carved wall, waiting this long between frames
    #[arg(long, value_name = "MILLIS")]
    pub animate: Option<u64>,

    /// TOML file with defaults for any of the options above
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,
}

/// Contents of the `--config` file, the maze itself lives under a `[maze]` table.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub maze: MazeConfig,
    pub cell_width: Option<usize>,
    pub animate_ms: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Options after merging the command line over the config file over the defaults.
#[derive(Debug, PartialEq)]
pub struct Settings {
    pub maze: MazeConfig,
    pub cell_width: usize,
    pub animate: Option<Duration>,
}

impl Settings {
    pub fn resolve(args: &Args, file: FileConfig) -> mazer_core::Result<Self> {
        let cols = args.cols.unwrap_or(file.maze.size.0);
        let rows = args.rows.unwrap_or(file.maze.size.1);
        let seed = args.seed.or(file.maze.seed);
        let cell_width = args
            .cell_width
            .or(file.cell_width)
            .unwrap_or(DEFAULT_CELL_WIDTH)
            .max(1);
        let animate = args
            .animate
            .or(file.animate_ms)
            .map(Duration::from_millis);

        Ok(Self {
            maze: MazeConfig::new((cols, rows), seed)?,
            cell_width,
            animate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::MazeError;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("mazer").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_without_any_input() {
        let settings = Settings::resolve(&args(&[]), FileConfig::default()).unwrap();

        assert_eq!(settings.maze, MazeConfig::new((12, 10), None).unwrap());
        assert_eq!(settings.cell_width, DEFAULT_CELL_WIDTH);
        assert_eq!(settings.animate, None);
    }

    #[test]
    fn command_line_overrides_file() {
        let file =
            FileConfig::parse("animate_ms = 50\n\n[maze]\nsize = [20, 8]\nseed = 3\n").unwrap();

        let settings = Settings::resolve(&args(&["--cols", "5", "--seed", "9"]), file).unwrap();

        assert_eq!(settings.maze, MazeConfig::new((5, 8), Some(9)).unwrap());
        assert_eq!(settings.animate, Some(Duration::from_millis(50)));
    }

    #[test]
    fn file_maze_table_is_optional() {
        let file = FileConfig::parse("cell_width = 2\n").unwrap();

        assert_eq!(file.maze, MazeConfig::default());
        assert_eq!(file.cell_width, Some(2));
    }

    #[test]
    fn negative_size_in_file_is_rejected() {
        let file = FileConfig::parse("[maze]\nsize = [-4, 3]\n").unwrap();

        let outcome = Settings::resolve(&args(&[]), file);

        assert_eq!(outcome, Err(MazeError::InvalidDimensions));
    }

    #[test]
    fn negative_size_is_rejected() {
        let outcome = Settings::resolve(&args(&["--rows", "-2"]), FileConfig::default());

        assert_eq!(outcome, Err(MazeError::InvalidDimensions));
    }

    #[test]
    fn cell_width_is_at_least_one() {
        let settings = Settings::resolve(&args(&["--cell-width", "0"]), FileConfig::default()).unwrap();

        assert_eq!(settings.cell_width, 1);
    }

    #[test]
    fn unknown_file_keys_are_errors() {
        assert!(FileConfig::parse("colums = 3\n").is_err());
    }
}
