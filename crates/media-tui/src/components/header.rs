//! Header — app bar with page title, search input, and profile name.

use ratatui::crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::action::{Action, ComponentId};
use crate::app_state::AppState;
use crate::component::Component;
use crate::theme::{C_ACCENT, C_MUTED, C_PRIMARY, C_SECONDARY};
use crate::widgets::search_input::{SearchAction, SearchInput};

pub struct Header {
    search: SearchInput,
}

impl Header {
    pub fn new() -> Self {
        Self {
            search: SearchInput::new("/", "search media"),
        }
    }

    pub fn open_search(&mut self) {
        self.search.activate();
    }

    pub fn close_search(&mut self) {
        self.search.clear();
        self.search.deactivate();
    }
}

impl Component for Header {
    fn id(&self) -> ComponentId {
        ComponentId::Header
    }

    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        if !self.search.active {
            return Vec::new();
        }
        match self.search.handle_key(key) {
            // Search fires on submit, not per keystroke.
            SearchAction::Changed(_) | SearchAction::None => Vec::new(),
            SearchAction::Confirmed(query) => {
                if query.trim().is_empty() {
                    vec![Action::CloseSearch]
                } else {
                    vec![Action::SubmitSearch(query.trim().to_string())]
                }
            }
            SearchAction::Cancelled => vec![Action::CloseSearch],
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, _focused: bool, state: &AppState) {
        // Row 0: app name, page title, profile. Row 1: search bar when open.
        let mut spans = vec![
            Span::styled(
                " mview ",
                Style::default().fg(C_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(state.page.title(), Style::default().fg(C_PRIMARY)),
        ];
        if let Some(title) = &state.listing_title {
            spans.push(Span::styled(
                format!(" — {}", title),
                Style::default().fg(C_SECONDARY),
            ));
        }
        if state.loading {
            spans.push(Span::styled(" …", Style::default().fg(C_MUTED)));
        }

        let profile = match state.profile_name() {
            Some(name) => format!("{} ", name),
            None => "anonymous ".to_string(),
        };
        let bar = Line::from(spans);
        frame.render_widget(Paragraph::new(bar), area);
        let right = Paragraph::new(Line::from(Span::styled(
            profile,
            Style::default().fg(C_SECONDARY),
        )))
        .right_aligned();
        frame.render_widget(
            right,
            Rect {
                height: 1.min(area.height),
                ..area
            },
        );

        if area.height > 1 && (self.search.active || state.search_query.is_some()) {
            let search_area = Rect {
                y: area.y + 1,
                height: 1,
                ..area
            };
            self.search.draw(frame, search_area);
        }
    }
}
