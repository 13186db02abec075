//! User interface rendering for the solved-maze viewer.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    app::App,
    batch::Report,
    grid::Grid,
    types::{Cell, Coordinate},
};

/// Renders the viewer screen for the currently selected report.
///
/// # Errors
///
/// This function may return errors from layout lookups or coordinate conversions when the maze is
/// too large for terminal dimensions.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let overall_layout = Layout::vertical([
        Constraint::Min(1),    // Maze and padding area
        Constraint::Length(3), // Tooltip block
    ])
    .split(frame.area());

    let content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let tooltip_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    match app.selected_report() {
        Some(report) => maze(report, frame, content_area)?,
        None => {
            let notice = Line::styled("No mazes were solved", Style::default().fg(Color::Green))
                .centered();
            frame.render_widget(notice, content_area);
        }
    }

    let position = format!(" {}/{} ", app.selected + 1, app.reports.len().max(1));
    let tooltip_block = Block::bordered()
        .title("(j) next / (k) previous / (q) quit")
        .title_top(Line::from(position).right_aligned())
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_area);

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget over the whole frame.
pub(crate) fn clear(frame: &mut Frame) {
    frame.render_widget(Clear, frame.area());
}

/// Renders one solved maze centred in `area`.
///
/// Walls are drawn green, the path red and the start and exit markers yellow on top of it. The
/// surrounding block carries the maze label and the search summary.
fn maze(report: &Report, frame: &mut Frame, area: Rect) -> Result<()> {
    let outcome = match report.path {
        Some(ref path) => format!("length {}", path.len()),
        None => "no path".to_owned(),
    };
    let label = format!(" {} ", report.label);
    let summary = format!(" {} {outcome} ", report.algorithm);

    let rows = u16::try_from(report.grid.row_count())?.saturating_add(2);
    let columns = u16::try_from(report.grid.width())?
        .max(u16::try_from(summary.len())?)
        .saturating_add(2);

    let block_area = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(rows),
        Constraint::Min(1),
    ])
    .split(area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze area from vertical layout")?;
    let block_area = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(columns),
        Constraint::Min(1),
    ])
    .split(block_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze area from horizontal layout")?;

    let block = Block::bordered()
        .title_top(label)
        .title_bottom(summary)
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let space = block.inner(block_area);
    frame.render_widget(block, block_area);

    // Pre-compute screen coordinates to handle errors before closures
    let walls: Vec<Coordinate> = report.grid.coordinates_of(Cell::Wall).collect();
    let markers: Vec<Coordinate> = report
        .grid
        .coordinates_of(Cell::Exit)
        .chain([report.start])
        .collect();
    let wall_coords = transform_maze_to_screen_coords(&walls, &report.grid)?;
    let path_coords =
        transform_maze_to_screen_coords(report.path.as_deref().unwrap_or_default(), &report.grid)?;
    let marker_coords = transform_maze_to_screen_coords(&markers, &report.grid)?;

    let canvas = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Dot)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &wall_coords,
                color: Color::Green,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &path_coords,
                color: Color::Red,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &marker_coords,
                color: Color::Yellow,
            });
        });

    frame.render_widget(canvas, space);

    Ok(())
}

/// Transforms maze coordinates to screen coordinates for canvas rendering.
///
/// Columns map to `x = column - (width - 1) / 2` and rows to `y = (rows - 1) / 2 - row`, which
/// centres the maze on the canvas origin with the first row at the top. The width is that of the
/// longest row, so ragged mazes stay left-aligned.
///
/// # Errors
///
/// This function returns an error if a dimension or coordinate does not fit in a [`u16`].
pub(crate) fn transform_maze_to_screen_coords(
    maze_coords: &[Coordinate],
    grid: &Grid,
) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(grid.row_count())?);
    let cols_n = f64::from(u16::try_from(grid.width())?);

    maze_coords
        .iter()
        .map(|coordinate| {
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(coordinate.row)?);
            let screen_x = f64::from(u16::try_from(coordinate.column)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}
