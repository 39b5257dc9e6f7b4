//! Pure render functions for the event log view.

use crate::domain::{human_size, ChangeEvent, ChangeKind, ScanSummary};
use crate::ui::styles;
use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Padding, Row, Table, TableState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render the event table, newest event first.
#[allow(clippy::too_many_arguments)]
pub fn render(
    frame: &mut Frame,
    area: Rect,
    events: &[&ChangeEvent],
    selected: usize,
    root: &str,
    paused: bool,
    table_state: &mut TableState,
) {
    let title = if paused {
        format!(" dirmon: {} [paused] ", root)
    } else {
        format!(" dirmon: {} ({} events) ", root, events.len())
    };

    let header = Row::new(vec![
        Cell::from("Time").style(styles::style_muted()),
        Cell::from("Change").style(styles::style_muted()),
        Cell::from("Path").style(styles::style_muted()),
        Cell::from("Size").style(styles::style_muted()),
    ])
    .height(1);

    let path_width = area.width.saturating_sub(40) as usize;
    let rows: Vec<Row> = events
        .iter()
        .enumerate()
        .map(|(i, event)| {
            let style = if i == selected {
                styles::style_selected()
            } else {
                styles::style_default()
            };

            Row::new(vec![
                Cell::from(Span::styled(event.relative_time(), styles::style_muted())),
                Cell::from(Span::styled(
                    event.kind.label(),
                    styles::style_kind(event.kind),
                )),
                Cell::from(Span::styled(
                    truncate(&event.key, path_width.max(20)),
                    styles::style_path(),
                )),
                Cell::from(human_size(event.size())),
            ])
            .style(style)
        })
        .collect();

    table_state.select(if events.is_empty() { None } else { Some(selected) });

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(8),
            Constraint::Min(20),
            Constraint::Length(10),
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

/// Render the status/help bar at the bottom.
pub fn render_status(frame: &mut Frame, area: Rect, summary: &ScanSummary, paused: bool) {
    let mut spans = vec![
        Span::styled(
            format!(" {} scans, {} events ", summary.scans, summary.total_events()),
            styles::style_muted(),
        ),
        Span::raw("· "),
        Span::styled(
            format!("+{}", summary.created),
            styles::style_kind(ChangeKind::Created),
        ),
        Span::raw(" "),
        Span::styled(
            format!("~{}", summary.changed),
            styles::style_kind(ChangeKind::Changed),
        ),
        Span::raw(" "),
        Span::styled(
            format!("-{}", summary.deleted),
            styles::style_kind(ChangeKind::Deleted),
        ),
        Span::raw("  "),
        Span::styled("[Tab]", styles::style_key_hint()),
        Span::raw(" Files  "),
        Span::styled("[p]", styles::style_key_hint()),
        Span::raw(" Pause  "),
        Span::styled("[c]", styles::style_key_hint()),
        Span::raw(" Clear  "),
        Span::styled("[q]", styles::style_key_hint()),
        Span::raw(" Quit  "),
        Span::styled("[?]", styles::style_key_hint()),
        Span::raw(" Help"),
    ];
    if paused {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("PAUSED", styles::style_paused()));
    }

    frame.render_widget(Line::from(spans), area);
}

fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        s.to_string()
    } else {
        let mut out = String::new();
        let mut width = 0;
        for c in s.chars() {
            let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if width + w >= max_width {
                break;
            }
            width += w;
            out.push(c);
        }
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate("a/b.txt", 20), "a/b.txt");
    }

    #[test]
    fn truncate_marks_long_strings() {
        assert_eq!(truncate("abcdefgh", 5), "abcd…");
    }
}
