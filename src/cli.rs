//! Command-line surface and logging setup.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use crate::{batch::BatchOptions, pathfinding::Algorithm, types::Coordinate};

/// Command-line arguments of the labyrinth solver.
///
/// Finds a path from the start cell to the exit cell of each maze file and reports its length and
/// the time the search took.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Maze files to solve, in order. They are labelled L1, L2 and so on.
    #[arg(
        value_name = "MAZE_FILE",
        default_values = ["mazes/l1.txt", "mazes/l2.txt", "mazes/l3.txt"]
    )]
    pub(crate) mazes: Vec<PathBuf>,
    /// Start coordinate as COL,ROW. Defaults to the cell marked `S`, or 1,1 if there is none.
    #[arg(short, long, value_name = "COL,ROW")]
    pub(crate) start: Option<Coordinate>,
    /// Search strategy.
    #[arg(short, long, value_enum, default_value_t = Algorithm::BreadthFirst)]
    pub(crate) algorithm: Algorithm,
    /// One-based index of the maze whose rendered solution is printed.
    #[arg(long, value_name = "INDEX", default_value_t = 2)]
    pub(crate) show: usize,
    /// Skip mazes that fail to load or have an invalid start instead of stopping.
    #[arg(short, long)]
    pub(crate) keep_going: bool,
    /// Browse the solved mazes in an interactive terminal view after the batch.
    #[arg(long)]
    pub(crate) view: bool,
    /// Increase log verbosity. May be repeated.
    #[arg(short, long, action = ArgAction::Count)]
    pub(crate) verbose: u8,
}

impl Cli {
    /// Collects the per-maze settings of the batch driver.
    pub(crate) const fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            algorithm: self.algorithm,
            start: self.start,
            show: Some(self.show),
            keep_going: self.keep_going,
        }
    }

    /// Returns the log level selected by the number of `-v` flags.
    pub(crate) const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Installs the global logger at the given level.
///
/// `RUST_LOG` directives are applied on top, so they can raise or lower individual modules.
pub(crate) fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["labyrinth"]).expect("defaults should parse");

        assert_eq!(
            cli.mazes,
            vec![
                PathBuf::from("mazes/l1.txt"),
                PathBuf::from("mazes/l2.txt"),
                PathBuf::from("mazes/l3.txt")
            ]
        );
        assert_eq!(cli.start, None);
        assert_eq!(cli.algorithm, Algorithm::BreadthFirst);
        assert_eq!(cli.show, 2);
        assert!(!cli.keep_going);
        assert!(!cli.view);
        assert_eq!(cli.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_cli_all_flags() {
        let cli = Cli::try_parse_from([
            "labyrinth",
            "--start",
            "3,4",
            "--algorithm",
            "dfs",
            "--show",
            "1",
            "--keep-going",
            "--view",
            "-vv",
            "a.txt",
            "b.txt",
        ])
        .expect("flags should parse");

        assert_eq!(cli.mazes, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(cli.start, Some(Coordinate::new(3, 4)));
        assert_eq!(cli.algorithm, Algorithm::DepthFirst);
        assert!(cli.keep_going);
        assert!(cli.view);
        assert_eq!(cli.log_level(), LevelFilter::Debug);
        assert_eq!(
            cli.batch_options(),
            BatchOptions {
                algorithm: Algorithm::DepthFirst,
                start: Some(Coordinate::new(3, 4)),
                show: Some(1),
                keep_going: true,
            }
        );
    }

    #[test]
    fn test_cli_rejects_malformed_start() {
        assert!(Cli::try_parse_from(["labyrinth", "--start", "three"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_algorithm() {
        assert!(Cli::try_parse_from(["labyrinth", "-a", "astar"]).is_err());
    }

    #[test]
    fn test_cli_log_levels() {
        let level = |args: &[&str]| {
            Cli::try_parse_from(args)
                .expect("verbosity should parse")
                .log_level()
        };

        assert_eq!(level(&["labyrinth", "-v"]), LevelFilter::Info);
        assert_eq!(level(&["labyrinth", "-vvv"]), LevelFilter::Trace);
        assert_eq!(level(&["labyrinth", "-vvvvv"]), LevelFilter::Trace);
    }

    #[test]
    fn test_cli_command_is_consistent() {
        Cli::command().debug_assert();
    }
}
