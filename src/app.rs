//! Interactive viewer state for browsing solved mazes.

use std::io;

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{batch::Report, events, ui};

/// Application state of the terminal viewer.
///
/// This structure holds the reports produced by the batch driver and which of them is on screen.
/// Ratatui renders from it and Crossterm key events update it.
pub(crate) struct App {
    /// Application exit flag.
    ///
    /// Set to `true` when the user asks to quit, after which [`App::run`] returns.
    pub(crate) exit: bool,
    /// Solved mazes, in batch order.
    pub(crate) reports: Vec<Report>,
    /// Index into [`reports`](App::reports) of the maze on screen.
    pub(crate) selected: usize,
}

impl App {
    /// Creates a viewer positioned on the first report.
    pub(crate) const fn new(reports: Vec<Report>) -> Self {
        Self {
            exit: false,
            reports,
            selected: 0,
        }
    }

    /// Runs the main loop of the viewer until the user quits.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`] if drawing or reading terminal events fails.
    pub(crate) fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| ui::draw(self, frame).map_err(io::Error::other))?;
            events::handle_events(self)?;
        }

        Ok(())
    }

    /// Returns the report currently on screen, if any.
    pub(crate) fn selected_report(&self) -> Option<&Report> {
        self.reports.get(self.selected)
    }

    /// Moves to the next report, staying on the last one.
    pub(crate) fn select_next(&mut self) {
        if self.selected + 1 < self.reports.len() {
            self.selected += 1;
        }
    }

    /// Moves to the previous report, staying on the first one.
    pub(crate) fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{grid::Grid, pathfinding::Algorithm, types::Coordinate};

    /// Builds a minimal report with the given label.
    pub(crate) fn create_test_report(label: &str) -> Report {
        Report {
            label: label.to_owned(),
            grid: Grid::from_lines(["#####", "#S A#", "#####"]).expect("grid should be valid"),
            start: Coordinate::new(1, 1),
            algorithm: Algorithm::BreadthFirst,
            path: Some(vec![
                Coordinate::new(1, 1),
                Coordinate::new(2, 1),
                Coordinate::new(3, 1),
            ]),
            elapsed: Duration::from_micros(12),
        }
    }

    #[test]
    fn test_app_new() {
        let app = App::new(vec![create_test_report("L1")]);

        assert!(!app.exit);
        assert_eq!(app.selected, 0);
        assert_eq!(
            app.selected_report().map(|report| report.label.as_str()),
            Some("L1")
        );
    }

    #[test]
    fn test_app_selection_is_clamped() {
        let mut app = App::new(vec![create_test_report("L1"), create_test_report("L2")]);

        app.select_previous();
        assert_eq!(app.selected, 0);

        app.select_next();
        assert_eq!(app.selected, 1);

        app.select_next();
        assert_eq!(app.selected, 1);

        app.select_previous();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_app_without_reports() {
        let mut app = App::new(Vec::new());

        app.select_next();

        assert_eq!(app.selected, 0);
        assert!(app.selected_report().is_none());
    }
}
