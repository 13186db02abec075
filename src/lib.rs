//! This crate finds the shortest path through character-grid labyrinths.
//!
//! A maze is a grid of characters where `#` is a wall, `S` the start, `A` the exit and anything
//! else open floor. [`find_path`] runs a breadth-first search from a start coordinate and returns
//! the shortest path to the nearest exit, which [`Grid::render_path`] can draw back onto a copy of
//! the grid. The binary runs a batch of maze files through the solver and reports each result.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

use std::io;

use color_eyre::eyre::Result;
use log::info;

mod app;
mod batch;
mod cli;
mod events;
mod file_loader;
mod grid;
mod pathfinding;
mod types;
mod ui;

pub use crate::{
    cli::Cli,
    file_loader::{load_grid, LoadError},
    grid::{Grid, GridError},
    pathfinding::{find_path, Algorithm, SolveError},
    types::{Cell, Coordinate, Direction, ParseCoordinateError},
};

/// Runs the solver as configured on the command line.
///
/// Every maze is loaded and solved in order with one summary line per maze written to standard
/// output. When the viewer was requested, the solved mazes are shown in the terminal afterwards.
///
/// # Errors
///
/// - [`LoadError`] if a maze cannot be loaded and `--keep-going` is not set.
/// - [`SolveError`] if the start coordinate is invalid and `--keep-going` is not set.
/// - [`std::io::Error`] if writing to standard output or driving the terminal fails.
pub fn run(cli: &Cli) -> Result<()> {
    cli::init_logging(cli.log_level());

    let options = cli.batch_options();
    let reports = batch::solve_batch(&cli.mazes, &options, &mut io::stdout().lock())?;
    info!("solved {} of {} mazes", reports.len(), cli.mazes.len());

    if cli.view {
        let mut terminal = ratatui::init();
        let result = app::App::new(reports).run(&mut terminal);
        ratatui::restore();
        result?;
    }

    Ok(())
}
