//! Pathfinding algorithms over a [`Grid`].
//!
//! The breadth-first search in [`find_path`] is the primary solver and always reports a shortest
//! path. A depth-first variant is offered through [`Algorithm::DepthFirst`] for comparison; it
//! finds some path to an exit but makes no promise about its length.

use std::{
    collections::{HashMap, HashSet, VecDeque},
    fmt,
};

use log::{debug, trace};

use crate::{
    grid::Grid,
    types::{Cell, Coordinate},
};

/// Error produced when a search is asked to start from a coordinate it cannot start from.
///
/// This is a configuration problem and is kept apart from a maze that simply has no solution,
/// which is reported as `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// The start coordinate lies outside the grid.
    #[error("start coordinate {0} is outside the grid")]
    StartOutOfBounds(Coordinate),
    /// The start coordinate points at a wall.
    #[error("start coordinate {0} is a wall")]
    StartOnWall(Coordinate),
}

/// Search strategy used to solve a maze.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    /// Breadth-first search, reporting a shortest path.
    #[default]
    #[value(name = "bfs")]
    BreadthFirst,
    /// Depth-first search, reporting the first path it stumbles upon.
    #[value(name = "dfs")]
    DepthFirst,
}

impl Algorithm {
    /// Runs the selected search from `start` to the nearest exit marker.
    ///
    /// # Errors
    ///
    /// See [`find_path`].
    pub fn solve(
        self,
        grid: &Grid,
        start: Coordinate,
    ) -> Result<Option<Vec<Coordinate>>, SolveError> {
        match self {
            Self::BreadthFirst => find_path(grid, start),
            Self::DepthFirst => find_path_depth_first(grid, start),
        }
    }

    /// Returns the short upper-case label used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

/// Computes the shortest path from `start` to the nearest cell marked as exit.
///
/// The returned path lists every coordinate from `start` to the exit, both inclusive, with each
/// consecutive pair one orthogonal step apart. If `start` is itself an exit the path is just
/// `[start]`. When no exit is reachable the result is `Ok(None)`.
///
/// Each coordinate is marked visited when it is generated as a neighbour, so it enters the frontier
/// at most once and the search runs in time and space linear in the number of reachable cells.
///
/// # Errors
///
/// - [`SolveError::StartOutOfBounds`] if `start` is not a cell of the grid.
/// - [`SolveError::StartOnWall`] if `start` is a wall.
pub fn find_path(grid: &Grid, start: Coordinate) -> Result<Option<Vec<Coordinate>>, SolveError> {
    validate_start(grid, start)?;

    let mut visited = HashSet::from([start]);
    let mut parents = HashMap::new();
    let mut frontier = VecDeque::from([start]);

    while let Some(current) = frontier.pop_front() {
        if grid.cell(current) == Some(Cell::Exit) {
            debug!(
                "breadth-first search reached exit {current} after visiting {} cells",
                visited.len()
            );
            return Ok(Some(reconstruct_path(&parents, current)));
        }

        for neighbor in grid.neighbors(current) {
            if visited.insert(neighbor) {
                let _ = parents.insert(neighbor, current);
                frontier.push_back(neighbor);
            }
        }

        trace!("expanded {current}, frontier holds {} cells", frontier.len());
    }

    debug!(
        "breadth-first search exhausted {} cells without reaching an exit",
        visited.len()
    );

    Ok(None)
}

/// Finds some path from `start` to an exit using an explicit depth-first stack.
///
/// Coordinates are marked visited when popped, and the parent recorded at that moment is the one
/// whose expansion pushed the entry. Neighbours are pushed in [`Direction::ALL`] order, so the last
/// direction is explored first.
///
/// [`Direction::ALL`]: crate::types::Direction::ALL
fn find_path_depth_first(
    grid: &Grid,
    start: Coordinate,
) -> Result<Option<Vec<Coordinate>>, SolveError> {
    validate_start(grid, start)?;

    let mut visited = HashSet::new();
    let mut parents = HashMap::new();
    let mut stack = vec![(start, None)];

    while let Some((current, via)) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        if let Some(via) = via {
            let _ = parents.insert(current, via);
        }

        if grid.cell(current) == Some(Cell::Exit) {
            debug!(
                "depth-first search reached exit {current} after visiting {} cells",
                visited.len()
            );
            return Ok(Some(reconstruct_path(&parents, current)));
        }

        stack.extend(
            grid.neighbors(current)
                .filter(|neighbor| !visited.contains(neighbor))
                .map(|neighbor| (neighbor, Some(current))),
        );
    }

    debug!(
        "depth-first search exhausted {} cells without reaching an exit",
        visited.len()
    );

    Ok(None)
}

/// Rejects start coordinates that are out of bounds or walls.
fn validate_start(grid: &Grid, start: Coordinate) -> Result<(), SolveError> {
    match grid.cell(start) {
        None => Err(SolveError::StartOutOfBounds(start)),
        Some(Cell::Wall) => Err(SolveError::StartOnWall(start)),
        Some(_) => Ok(()),
    }
}

/// Walks the parent chain back from `exit` and returns the path in start-to-exit order.
///
/// The start is the only visited coordinate without a parent, which ends the walk.
fn reconstruct_path(
    parents: &HashMap<Coordinate, Coordinate>,
    exit: Coordinate,
) -> Vec<Coordinate> {
    let mut path = vec![exit];
    let mut current = exit;

    while let Some(&parent) = parents.get(&current) {
        path.push(parent);
        current = parent;
    }

    path.reverse();
    path
}
