//! Value types shared by the grid model and the pathfinding algorithms.

use std::{fmt, num::ParseIntError, str::FromStr};

/// Character marking a wall cell.
pub(crate) const WALL_MARKER: char = '#';

/// Character marking the start cell.
pub(crate) const START_MARKER: char = 'S';

/// Character marking the exit cell.
pub(crate) const EXIT_MARKER: char = 'A';

/// Character written over traversed cells when rendering a solution.
pub(crate) const PATH_MARKER: char = '.';

/// Start coordinate used when the command line names none and the grid carries no start marker.
pub(crate) const DEFAULT_START: Coordinate = Coordinate::new(1, 1);

/// Position of a single cell in a grid.
///
/// Coordinates are zero-indexed with `(0, 0)` at the top-left corner. The column grows to the east
/// and the row grows to the south. The type is a plain value and is used as the key of the visited
/// set and parent mapping during a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Column index within the row.
    pub column: usize,
    /// Row index within the grid.
    pub row: usize,
}

impl Coordinate {
    /// Builds a coordinate from a column and a row index.
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Returns the coordinate one step away in the given direction.
    ///
    /// Steps that would move past column or row zero yield [`None`]. The upper bounds are not
    /// checked here since they depend on the grid.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (delta_column, delta_row) = direction.offset();

        Some(Self {
            column: self.column.checked_add_signed(delta_column)?,
            row: self.row.checked_add_signed(delta_row)?,
        })
    }

    /// Returns the number of orthogonal steps separating two coordinates.
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> usize {
        self.column.abs_diff(other.column) + self.row.abs_diff(other.row)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.column, self.row)
    }
}

/// Error produced when a `COL,ROW` string cannot be read as a [`Coordinate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCoordinateError {
    /// The input did not contain the comma separating column and row.
    #[error("expected a coordinate in the form COL,ROW but got {0:?}")]
    MissingSeparator(String),
    /// One of the two components was not an unsigned integer.
    #[error("invalid coordinate component {input:?}")]
    InvalidComponent {
        /// The offending component, trimmed.
        input: String,
        /// The underlying integer parsing failure.
        #[source]
        source: ParseIntError,
    },
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().trim_start_matches('(').trim_end_matches(')');
        let (column, row) = trimmed
            .split_once(',')
            .ok_or_else(|| ParseCoordinateError::MissingSeparator(input.to_owned()))?;

        let parse = |component: &str| {
            let component = component.trim();
            component
                .parse::<usize>()
                .map_err(|source| ParseCoordinateError::InvalidComponent {
                    input: component.to_owned(),
                    source,
                })
        };

        Ok(Self::new(parse(column)?, parse(row)?))
    }
}

/// Orthogonal movement directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards increasing columns.
    East,
    /// Towards decreasing columns.
    West,
    /// Towards increasing rows.
    South,
    /// Towards decreasing rows.
    North,
}

impl Direction {
    /// All directions in expansion order.
    ///
    /// The order only decides which of several equally short paths a search reports.
    pub const ALL: [Self; 4] = [Self::East, Self::West, Self::South, Self::North];

    /// Returns the `(column, row)` offset of a single step in this direction.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::East => (1, 0),
            Self::West => (-1, 0),
            Self::South => (0, 1),
            Self::North => (0, -1),
        }
    }
}

/// Classification of a grid character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Impassable cell, written `#`.
    Wall,
    /// Any passable cell without a special meaning.
    Floor,
    /// The start marker, written `S`.
    Start,
    /// The exit marker, written `A`.
    Exit,
}

impl Cell {
    /// Returns whether a search may step onto this cell.
    #[must_use]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

impl From<char> for Cell {
    fn from(value: char) -> Self {
        match value {
            WALL_MARKER => Self::Wall,
            START_MARKER => Self::Start,
            EXIT_MARKER => Self::Exit,
            _ => Self::Floor,
        }
    }
}
