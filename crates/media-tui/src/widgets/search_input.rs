//! SearchInput — wraps tui-input for the search bar and the upload prompt.

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input};

use crate::theme::{style_search, C_MUTED, C_SEARCH_BG};

pub enum SearchAction {
    Changed(String),
    Confirmed(String),
    Cancelled,
    None,
}

pub struct SearchInput {
    input: Input,
    pub active: bool,
    prefix: &'static str,
    placeholder: String,
}

impl SearchInput {
    pub fn new(prefix: &'static str, placeholder: impl Into<String>) -> Self {
        Self {
            input: Input::default(),
            active: false,
            prefix,
            placeholder: placeholder.into(),
        }
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn clear(&mut self) {
        self.input = Input::default();
    }

    pub fn set_value(&mut self, value: &str) {
        self.input = Input::new(value.to_string());
    }

    /// Handle a key event.
    ///
    /// Esc behaviour: with text present the first Esc clears it, a second
    /// Esc cancels the prompt.
    pub fn handle_key(&mut self, key: KeyEvent) -> SearchAction {
        match key.code {
            KeyCode::Esc => {
                if !self.input.value().is_empty() {
                    self.input = Input::default();
                    SearchAction::Changed(String::new())
                } else {
                    self.deactivate();
                    SearchAction::Cancelled
                }
            }
            KeyCode::Enter => {
                self.deactivate();
                SearchAction::Confirmed(self.input.value().to_string())
            }
            _ => {
                self.input
                    .handle_event(&ratatui::crossterm::event::Event::Key(key));
                SearchAction::Changed(self.input.value().to_string())
            }
        }
    }

    /// Render the input bar into `area`.
    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let scroll = self
            .input
            .visual_scroll(area.width.saturating_sub(4) as usize);
        let value = self.input.value();
        let display = if value.is_empty() {
            Span::styled(
                format!("{} {}", self.prefix, self.placeholder),
                Style::default().fg(C_MUTED),
            )
        } else {
            Span::styled(format!("{} {}", self.prefix, &value[scroll..]), style_search())
        };

        let paragraph =
            Paragraph::new(Line::from(vec![display])).style(Style::default().bg(C_SEARCH_BG));
        frame.render_widget(paragraph, area);

        if self.active {
            let cursor_x = area.x
                + self.prefix.len() as u16
                + 1
                + (self.input.visual_cursor().saturating_sub(scroll)) as u16;
            frame.set_cursor_position((cursor_x.min(area.x + area.width.saturating_sub(1)), area.y));
        }
    }
}
