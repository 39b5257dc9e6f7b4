//! Pure render function for the help overlay.

use crate::ui::styles;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

/// Render the help overlay.
pub fn render(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(55, 65, area);

    frame.render_widget(Clear, popup_area);

    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<9}", k), styles::style_key_hint()),
            Span::raw(desc.to_string()),
        ])
    };

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        key("j / ↓", "Move down"),
        key("k / ↑", "Move up"),
        key("g", "Go to top"),
        key("G", "Go to bottom"),
        key("PgUp", "Page up"),
        key("PgDn", "Page down"),
        Line::from(""),
        Line::from(Span::styled(
            "Monitoring",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        key("Tab", "Switch events / files view"),
        key("p", "Pause or resume scanning"),
        key("r", "Rescan now"),
        key("c", "Clear the event log"),
        Line::from(""),
        Line::from(Span::styled(
            "General",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        key("?", "Toggle this help"),
        key("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            styles::style_muted(),
        )),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .padding(Padding::uniform(1))
                .style(Style::default().bg(Color::Black)),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
