//! Batch driver that loads, solves and reports a list of mazes in order.

use std::{
    error::Error,
    io::Write,
    path::PathBuf,
    time::{Duration, Instant},
};

use color_eyre::eyre::Result;
use log::{error, info, warn};

use crate::{
    file_loader,
    grid::Grid,
    pathfinding::Algorithm,
    types::{Cell, Coordinate, DEFAULT_START},
};

/// Settings shared by every maze of a batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct BatchOptions {
    /// Search strategy applied to every maze.
    pub(crate) algorithm: Algorithm,
    /// Start coordinate forced for every maze, overriding the start marker.
    pub(crate) start: Option<Coordinate>,
    /// One-based index of the maze whose rendered solution gets printed.
    pub(crate) show: Option<usize>,
    /// Whether to skip mazes that fail instead of aborting the batch.
    pub(crate) keep_going: bool,
}

/// Outcome of solving a single maze.
#[derive(Clone, Debug)]
pub(crate) struct Report {
    /// Batch label of the maze, `L1` for the first source and so on.
    pub(crate) label: String,
    /// The canonical grid as loaded.
    pub(crate) grid: Grid,
    /// Coordinate the search started from.
    pub(crate) start: Coordinate,
    /// Strategy that produced the path.
    pub(crate) algorithm: Algorithm,
    /// Path from start to exit, or [`None`] if the maze has no solution.
    pub(crate) path: Option<Vec<Coordinate>>,
    /// Wall-clock time spent in the search alone.
    pub(crate) elapsed: Duration,
}

impl Report {
    /// Returns the number of coordinates on the path, zero when there is none.
    pub(crate) fn path_len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }

    /// Returns the grid with the path drawn over it, or the plain grid when there is no path.
    pub(crate) fn rendered(&self) -> Grid {
        self.path
            .as_deref()
            .map_or_else(|| self.grid.clone(), |path| self.grid.render_path(path))
    }

    /// Returns the one-line summary printed for this maze.
    pub(crate) fn summary(&self) -> String {
        if self.path.is_some() {
            format!(
                "{} {} found path of length {} in {:?}",
                self.algorithm,
                self.label,
                self.path_len(),
                self.elapsed
            )
        } else {
            format!(
                "{} {} found no path in {:?}",
                self.algorithm, self.label, self.elapsed
            )
        }
    }
}

/// Loads and solves every source in order, writing one summary line per maze to `out`.
///
/// The maze selected by [`BatchOptions::show`] additionally gets its rendered solution written
/// below its summary, one grid row per line. Labels follow the position in `sources`, so a skipped
/// maze still consumes its label.
///
/// # Errors
///
/// - [`file_loader::LoadError`] if a source cannot be loaded and `keep_going` is unset.
/// - [`crate::SolveError`] if a start coordinate is invalid and `keep_going` is unset.
/// - [`std::io::Error`] if writing to `out` fails.
pub(crate) fn solve_batch<W: Write>(
    sources: &[PathBuf],
    options: &BatchOptions,
    out: &mut W,
) -> Result<Vec<Report>> {
    if let Some(show) = options.show {
        if show == 0 || show > sources.len() {
            warn!(
                "cannot show maze {show}, the batch only holds {} mazes",
                sources.len()
            );
        }
    }

    let mut reports = Vec::with_capacity(sources.len());

    for (idx, source) in sources.iter().enumerate() {
        let label = format!("L{}", idx + 1);
        info!("loading {label} from {}", source.display());

        let grid = match file_loader::load_grid(source) {
            Ok(grid) => grid,
            Err(err) => {
                skip_or_fail(&label, err, options, out)?;
                continue;
            }
        };

        let start = resolve_start(&grid, options.start);

        let timer = Instant::now();
        let result = options.algorithm.solve(&grid, start);
        let elapsed = timer.elapsed();

        let path = match result {
            Ok(path) => path,
            Err(err) => {
                skip_or_fail(&label, err, options, out)?;
                continue;
            }
        };

        let report = Report {
            label,
            grid,
            start,
            algorithm: options.algorithm,
            path,
            elapsed,
        };

        writeln!(out, "{}", report.summary())?;

        if options.show == Some(idx + 1) && report.path.is_some() {
            for line in report.rendered().lines() {
                writeln!(out, "{line}")?;
            }
        }

        reports.push(report);
    }

    Ok(reports)
}

/// Picks the start coordinate for a grid.
///
/// An explicit coordinate wins, then the first start marker of the grid, then [`DEFAULT_START`].
pub(crate) fn resolve_start(grid: &Grid, requested: Option<Coordinate>) -> Coordinate {
    requested
        .or_else(|| grid.find(Cell::Start))
        .unwrap_or_else(|| {
            warn!("grid has no start marker, falling back to {DEFAULT_START}");
            DEFAULT_START
        })
}

/// Either reports a failed maze and lets the batch carry on, or hands the error back to abort it.
fn skip_or_fail<W, E>(label: &str, err: E, options: &BatchOptions, out: &mut W) -> Result<()>
where
    W: Write,
    E: Error + Send + Sync + 'static,
{
    if !options.keep_going {
        return Err(err.into());
    }

    error!("skipping {label}: {err}");
    writeln!(out, "{label} skipped: {err}")?;

    Ok(())
}
