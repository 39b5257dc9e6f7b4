//! Pure render functions for the current-snapshot view.

use crate::domain::{human_size, DirSnapshot, FileSnapshot};
use crate::ui::styles;
use chrono::{Local, TimeZone};
use ratatui::{
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Block, Borders, Cell, Padding, Row, Table, TableState},
    Frame,
};

/// Render the file listing from the latest snapshot.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    snapshot: &DirSnapshot,
    selected: usize,
    table_state: &mut TableState,
) {
    let title = format!(
        " files: {} ({} files, {}) ",
        snapshot.root.display(),
        snapshot.file_count(),
        human_size(snapshot.total_len()),
    );

    let header = Row::new(vec![
        Cell::from("Path").style(styles::style_muted()),
        Cell::from("Size").style(styles::style_muted()),
        Cell::from("Modified").style(styles::style_muted()),
    ])
    .height(1);

    let rows: Vec<Row> = snapshot
        .files
        .iter()
        .enumerate()
        .map(|(i, (key, file))| {
            let style = if i == selected {
                styles::style_selected()
            } else {
                styles::style_default()
            };

            Row::new(vec![
                Cell::from(Span::styled(key.clone(), styles::style_path())),
                Cell::from(human_size(file.len)),
                Cell::from(Span::styled(modified_clock(file), styles::style_muted())),
            ])
            .style(style)
        })
        .collect();

    table_state.select(if snapshot.files.is_empty() {
        None
    } else {
        Some(selected)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(10),
            Constraint::Length(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .padding(Padding::horizontal(1)),
    )
    .row_highlight_style(styles::style_selected());

    frame.render_stateful_widget(table, area, table_state);
}

fn modified_clock(file: &FileSnapshot) -> String {
    match Local.timestamp_millis_opt(file.modified_ms).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "-".to_string(),
    }
}
