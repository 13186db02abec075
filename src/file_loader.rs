//! Loading of labyrinth grids from text files.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;

use crate::grid::{Grid, GridError};

/// Error produced when a maze file cannot be turned into a [`Grid`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read maze file {}", .path.display())]
    Io {
        /// Path of the file that failed to load.
        path: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: io::Error,
    },
    /// The file was read but its contents do not form a valid grid.
    #[error("maze file {} is not a valid grid", .path.display())]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// The grid invariant that was broken.
        #[source]
        source: GridError,
    },
}

/// Reads a maze file and builds a grid with one row per line.
///
/// Line terminators are stripped, whether `\n` or `\r\n`, and no other trimming is applied since
/// spaces are floor cells.
///
/// # Errors
///
/// - [`LoadError::Io`] if the file cannot be opened or is not valid UTF-8.
/// - [`LoadError::Parse`] if the file is empty or contains an empty line.
pub fn load_grid(path: &Path) -> Result<Grid, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let grid = contents.parse::<Grid>().map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "loaded {} with {} rows and width {}",
        path.display(),
        grid.row_count(),
        grid.width()
    );

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use std::{env, process};

    use super::*;

    /// Writes `contents` to a uniquely named file in the system temporary directory.
    fn temp_maze(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("labyrinth-{}-{name}.txt", process::id()));
        fs::write(&path, contents).expect("failed to write temporary maze");
        path
    }

    #[test]
    fn test_load_grid_valid_file() {
        let path = temp_maze("valid", "#####\n#S A#\n#####\n");

        let grid = load_grid(&path).expect("maze should load");
        fs::remove_file(&path).expect("failed to remove temporary maze");

        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.to_string(), "#####\n#S A#\n#####");
    }

    #[test]
    fn test_load_grid_missing_file() {
        let path = env::temp_dir().join("labyrinth-this-file-does-not-exist.txt");

        let result = load_grid(&path);

        assert!(matches!(
            result,
            Err(LoadError::Io { ref source, .. }) if source.kind() == io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn test_load_grid_empty_file() {
        let path = temp_maze("empty", "");

        let result = load_grid(&path);
        fs::remove_file(&path).expect("failed to remove temporary maze");

        assert!(matches!(
            result,
            Err(LoadError::Parse {
                source: GridError::Empty,
                ..
            })
        ));
    }

    #[test]
    fn test_load_grid_blank_line() {
        let path = temp_maze("blank", "###\n\n#A#\n");

        let result = load_grid(&path);
        fs::remove_file(&path).expect("failed to remove temporary maze");

        assert!(matches!(
            result,
            Err(LoadError::Parse {
                source: GridError::EmptyRow { row: 1 },
                ..
            })
        ));
    }

    #[test]
    fn test_load_error_mentions_path() {
        let path = PathBuf::from("missing/l9.txt");

        let message = load_grid(&path)
            .expect_err("missing file should fail")
            .to_string();

        assert!(message.contains("missing/l9.txt"));
    }
}
