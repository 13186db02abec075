//! Grid model of a labyrinth and the solution overlay renderer.
//!
//! A [`Grid`] is an ordered sequence of rows, each an ordered sequence of characters. Rows may
//! differ in length, so every column bound is checked against the length of the row it belongs to
//! rather than against a global width.

use std::{fmt, str::FromStr};

use crate::types::{Cell, Coordinate, Direction, PATH_MARKER};

/// Error produced when a grid is built from text that breaks the grid invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The text contained no rows at all.
    #[error("the grid contains no rows")]
    Empty,
    /// One of the rows contained no cells.
    #[error("row {row} of the grid is empty")]
    EmptyRow {
        /// Zero-based index of the empty row.
        row: usize,
    },
}

/// Rectangular or ragged array of maze cells.
///
/// The canonical grid is never mutated once built. Rendering a solution produces an independent
/// copy through [`Grid::render_path`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Cells stored row by row.
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Builds a grid from a sequence of text lines, one row per line.
    ///
    /// # Errors
    ///
    /// - [`GridError::Empty`] if there are no lines.
    /// - [`GridError::EmptyRow`] if any line is empty.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = lines
            .into_iter()
            .enumerate()
            .map(|(row, line)| {
                let cells: Vec<char> = line.as_ref().chars().collect();
                if cells.is_empty() {
                    Err(GridError::EmptyRow { row })
                } else {
                    Ok(cells)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if rows.is_empty() {
            return Err(GridError::Empty);
        }

        Ok(Self { rows })
    }

    /// Returns the number of rows in the grid.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the length of the longest row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or_default()
    }

    /// Returns whether the coordinate names a cell of this grid.
    ///
    /// The row must lie within `[0, row_count)` and the column within `[0, len)` where `len` is
    /// the length of that particular row.
    #[must_use]
    pub fn in_bounds(&self, coordinate: Coordinate) -> bool {
        self.rows
            .get(coordinate.row)
            .is_some_and(|cells| coordinate.column < cells.len())
    }

    /// Returns the character stored at the coordinate, or [`None`] when it is out of bounds.
    #[must_use]
    pub fn cell_at(&self, coordinate: Coordinate) -> Option<char> {
        self.rows
            .get(coordinate.row)?
            .get(coordinate.column)
            .copied()
    }

    /// Returns the classified cell at the coordinate, or [`None`] when it is out of bounds.
    #[must_use]
    pub fn cell(&self, coordinate: Coordinate) -> Option<Cell> {
        self.cell_at(coordinate).map(Cell::from)
    }

    /// Returns the first coordinate, in row-major order, holding the given kind of cell.
    #[must_use]
    pub fn find(&self, kind: Cell) -> Option<Coordinate> {
        self.coordinates_of(kind).next()
    }

    /// Iterates over every coordinate holding the given kind of cell, in row-major order.
    pub(crate) fn coordinates_of(&self, kind: Cell) -> impl Iterator<Item = Coordinate> + '_ {
        self.rows.iter().enumerate().flat_map(move |(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(move |&(_, &value)| Cell::from(value) == kind)
                .map(move |(column, _)| Coordinate::new(column, row))
        })
    }

    /// Iterates over the in-bounds, passable orthogonal neighbours of a coordinate.
    ///
    /// Neighbours are yielded in [`Direction::ALL`] order.
    pub(crate) fn neighbors(
        &self,
        coordinate: Coordinate,
    ) -> impl Iterator<Item = Coordinate> + '_ {
        Direction::ALL.into_iter().filter_map(move |direction| {
            coordinate
                .step(direction)
                .filter(|&neighbor| self.cell(neighbor).is_some_and(Cell::is_passable))
        })
    }

    /// Produces a copy of the grid with every path cell overwritten by the path marker.
    ///
    /// Start and exit markers keep their original character even when they lie on the path.
    /// Coordinates outside the grid are ignored. The grid this is called on is left untouched.
    #[must_use]
    pub fn render_path(&self, path: &[Coordinate]) -> Self {
        let mut rendered = self.clone();

        for coordinate in path {
            if let Some(value) = rendered
                .rows
                .get_mut(coordinate.row)
                .and_then(|cells| cells.get_mut(coordinate.column))
            {
                if !matches!(Cell::from(*value), Cell::Start | Cell::Exit) {
                    *value = PATH_MARKER;
                }
            }
        }

        rendered
    }

    /// Iterates over the rows of the grid as owned strings.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(|cells| cells.iter().collect())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_lines(input.lines())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, line) in self.lines().enumerate() {
            if idx > 0 {
                writeln!(formatter)?;
            }
            formatter.write_str(&line)?;
        }

        Ok(())
    }
}
