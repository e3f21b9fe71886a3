//! MediaList — the card list shared by every listing page.

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthChar;

use media_api::items::CardItem;

use crate::action::{Action, ComponentId, Page};
use crate::app_state::AppState;
use crate::component::Component;
use crate::theme::{
    style_default, style_muted, style_secondary, style_selected, style_selected_focused, C_LABEL,
};
use crate::widgets::pane_chrome::{pane_chrome, Badge};
use crate::widgets::scrollable_list::ScrollableList;

pub struct MediaList {
    list: ScrollableList<CardItem>,
}

/// Cut a string to a display width, appending an ellipsis when trimmed.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        width += w;
        out.push(ch);
    }
    out
}

impl MediaList {
    pub fn new() -> Self {
        Self {
            list: ScrollableList::new(),
        }
    }

    pub fn set_cards(&mut self, cards: Vec<CardItem>) {
        self.list.set_items(cards);
    }
}

impl Component for MediaList {
    fn id(&self) -> ComponentId {
        ComponentId::MediaList
    }

    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.list.select_up(1);
                Vec::new()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.list.select_down(1);
                Vec::new()
            }
            KeyCode::PageUp => {
                self.list.select_up(10);
                Vec::new()
            }
            KeyCode::PageDown => {
                self.list.select_down(10);
                Vec::new()
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.list.select_first();
                Vec::new()
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.list.select_last();
                Vec::new()
            }
            KeyCode::Enter => match self.list.selected_item() {
                Some(card) => vec![Action::Navigate(Page::from_card_url(&card.url))],
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        let mut title = match (&state.page, &state.search_query) {
            (Page::Home, Some(query)) => format!("Search results for \"{}\"", query),
            _ => state.page.title().to_string(),
        };
        if !self.list.is_empty() {
            title = format!("{} ({})", title, self.list.len());
        }
        let badge = state.loading.then_some(Badge {
            text: "LOADING",
            color: crate::theme::C_SECONDARY,
        });
        let block = pane_chrome(&title, focused, badge);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.list.is_empty() {
            let message = if state.loading {
                "Loading…"
            } else {
                "No media found"
            };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(message, style_muted()))),
                inner,
            );
            return;
        }

        let height = inner.height as usize;
        self.list.ensure_visible(height);
        for (row, (index, card)) in self.list.visible_items(height).iter().enumerate() {
            let selected = *index == self.list.selected;
            let row_style = match (selected, focused) {
                (true, true) => style_selected_focused(),
                (true, false) => style_selected(),
                _ => style_default(),
            };

            let width = inner.width as usize;
            let mut spans = vec![Span::styled(
                truncate_to_width(&card.title, width.saturating_sub(2).min(48)),
                row_style,
            )];
            if let Some(label) = &card.label {
                spans.push(Span::styled(format!("  [{}]", label), Style::default().fg(C_LABEL)));
            }
            if !card.description.is_empty() {
                let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
                spans.push(Span::styled(
                    format!(
                        "  {}",
                        truncate_to_width(&card.description, width.saturating_sub(used + 2))
                    ),
                    style_secondary(),
                ));
            }

            let line_area = Rect {
                y: inner.y + row as u16,
                height: 1,
                ..inner
            };
            frame.render_widget(Paragraph::new(Line::from(spans)).style(row_style), line_area);
        }
    }
}
