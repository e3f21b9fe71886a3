//! Color palette and style constants for the media TUI.

use ratatui::style::{Color, Modifier, Style};

// ── Color palette ─────────────────────────────────────────────────────────────

pub const C_BG: Color = Color::Rgb(16, 18, 20);
pub const C_ACCENT: Color = Color::Rgb(16, 100, 112);
pub const C_PRIMARY: Color = Color::Rgb(210, 212, 220);
pub const C_SECONDARY: Color = Color::Rgb(118, 122, 140);
pub const C_MUTED: Color = Color::Rgb(74, 76, 90);
pub const C_ERROR: Color = Color::Rgb(255, 85, 85);
pub const C_SELECTION_BG: Color = Color::Rgb(26, 30, 40);
pub const C_PANEL_BORDER: Color = Color::Rgb(40, 42, 54);
pub const C_PANEL_BORDER_FOCUSED: Color = Color::Rgb(60, 150, 160);
pub const C_LABEL: Color = Color::Rgb(90, 150, 200);
pub const C_CHART: Color = Color::Rgb(16, 100, 112);
pub const C_SEARCH_BG: Color = Color::Rgb(20, 22, 32);
pub const C_SEARCH_FG: Color = Color::Rgb(255, 200, 80);
pub const C_STATUS_OK: Color = Color::Rgb(80, 200, 120);

// ── Predefined styles ─────────────────────────────────────────────────────────

pub fn style_default() -> Style {
    Style::default().fg(C_PRIMARY)
}

pub fn style_secondary() -> Style {
    Style::default().fg(C_SECONDARY)
}

pub fn style_muted() -> Style {
    Style::default().fg(C_MUTED)
}

pub fn style_selected() -> Style {
    Style::default().bg(C_SELECTION_BG).fg(C_PRIMARY)
}

pub fn style_selected_focused() -> Style {
    Style::default()
        .bg(C_SELECTION_BG)
        .fg(C_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn style_focused_border() -> Style {
    Style::default().fg(C_PANEL_BORDER_FOCUSED)
}

pub fn style_unfocused_border() -> Style {
    Style::default().fg(C_PANEL_BORDER)
}

pub fn style_search() -> Style {
    Style::default().fg(C_SEARCH_FG).bg(C_SEARCH_BG)
}

pub fn style_error() -> Style {
    Style::default().fg(C_ERROR)
}
