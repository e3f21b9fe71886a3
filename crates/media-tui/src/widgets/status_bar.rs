//! Status bar — bottom line with mode, transient message, and keybindings.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::action::Page;
use crate::app_state::{AppState, Severity};
use crate::theme::{style_error, C_MUTED, C_SEARCH_FG, C_SECONDARY, C_STATUS_OK};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Search,
    Upload,
    Edit,
}

impl InputMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Search => "SEARCH",
            Self::Upload => "UPLOAD",
            Self::Edit => "EDIT",
        }
    }

    pub fn color(self) -> ratatui::style::Color {
        match self {
            Self::Normal => C_MUTED,
            Self::Search => C_SEARCH_FG,
            Self::Upload => C_STATUS_OK,
            Self::Edit => C_STATUS_OK,
        }
    }
}

fn hints_for(page: &Page) -> &'static str {
    match page {
        Page::Home => "/:search  n:upload  2:channels  3:playlists  enter:open  q:quit",
        Page::Channels | Page::Playlists => "1:home  enter:open  r:refresh  q:quit",
        Page::Channel(_) | Page::Playlist(_) => "esc:back  enter:open  q:quit",
        Page::Media(_) => "a:analytics  c:copy embed  d:copy source  t:retitle  esc:back",
        Page::Analytics(_) => "esc:back  q:quit",
    }
}

/// Draw the status bar: mode badge, transient message, key hints.
pub fn draw_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let mode = state.input_mode;
    let mut spans = vec![
        Span::styled(
            format!(" {} ", mode.label()),
            Style::default()
                .fg(mode.color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];

    if let Some((severity, status)) = &state.status {
        let style = match severity {
            Severity::Error => style_error(),
            Severity::Info => Style::default().fg(C_SECONDARY),
        };
        spans.push(Span::styled(status.clone(), style));
    } else {
        spans.push(Span::styled(
            hints_for(&state.page),
            Style::default().fg(C_MUTED),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
