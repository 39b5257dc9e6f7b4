//! Color scheme for the monitor views.
//! Uses basic terminal colors for maximum compatibility.

use crate::domain::ChangeKind;
use ratatui::style::{Color, Modifier, Style};

pub const FG_DEFAULT: Color = Color::White;
pub const FG_MUTED: Color = Color::DarkGray;
pub const FG_CREATED: Color = Color::Green;
pub const FG_CHANGED: Color = Color::Yellow;
pub const FG_DELETED: Color = Color::Red;
pub const FG_PATH: Color = Color::Cyan;
pub const FG_KEY: Color = Color::Yellow;
pub const BG_SELECTED: Color = Color::DarkGray;

pub fn style_default() -> Style {
    Style::default().fg(FG_DEFAULT)
}

pub fn style_muted() -> Style {
    Style::default().fg(FG_MUTED)
}

pub fn style_path() -> Style {
    Style::default().fg(FG_PATH)
}

pub fn style_key_hint() -> Style {
    Style::default().fg(FG_KEY)
}

pub fn style_selected() -> Style {
    Style::default().bg(BG_SELECTED).add_modifier(Modifier::BOLD)
}

pub fn style_kind(kind: ChangeKind) -> Style {
    let fg = match kind {
        ChangeKind::Created => FG_CREATED,
        ChangeKind::Changed => FG_CHANGED,
        ChangeKind::Deleted => FG_DELETED,
    };
    Style::default().fg(fg)
}

pub fn style_paused() -> Style {
    Style::default().fg(FG_DELETED).add_modifier(Modifier::BOLD)
}
