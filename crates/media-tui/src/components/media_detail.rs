//! MediaDetail — one media item: metadata, description, best source.

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use media_api::sources::best_source;

use crate::action::{Action, ComponentId};
use crate::app_state::AppState;
use crate::component::Component;
use crate::theme::{style_default, style_muted, style_secondary, C_ACCENT, C_LABEL, C_PRIMARY};
use crate::widgets::pane_chrome::{pane_chrome, Badge};

pub struct MediaDetail;

/// "1:02:33" / "12:05" from a duration in seconds.
fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

impl MediaDetail {
    pub fn new() -> Self {
        Self
    }
}

impl Component for MediaDetail {
    fn id(&self) -> ComponentId {
        ComponentId::MediaDetail
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        match key.code {
            KeyCode::Char('a') => vec![Action::OpenAnalytics],
            KeyCode::Char('c') => vec![Action::CopyEmbedCode],
            KeyCode::Char('d') => {
                let has_source = state
                    .media_item
                    .as_ref()
                    .and_then(|item| item.sources.as_deref())
                    .and_then(best_source)
                    .is_some();
                if has_source {
                    vec![Action::CopySourceUrl]
                } else {
                    vec![Action::ShowStatus("no downloadable source".to_string())]
                }
            }
            KeyCode::Char('t') if state.owns_current_media() => vec![Action::OpenEditPrompt],
            _ => Vec::new(),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        let badge = state.loading.then_some(Badge {
            text: "LOADING",
            color: crate::theme::C_SECONDARY,
        });
        let block = pane_chrome("Media", focused, badge);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(item) = &state.media_item else {
            let message = if state.loading { "Loading…" } else { "No media found" };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(message, style_muted()))),
                inner,
            );
            return;
        };

        let mut lines = vec![Line::from(Span::styled(
            item.title.clone(),
            Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD),
        ))];

        if let Some(channel) = &item.channel {
            let mut spans = vec![
                Span::styled("in ", style_muted()),
                Span::styled(channel.title.clone(), Style::default().fg(C_LABEL)),
            ];
            if state.owns_current_media() {
                spans.push(Span::styled("  (you manage this channel)", style_muted()));
            }
            lines.push(Line::from(spans));
        }

        let mut meta = vec![format!("{} {}", item.kind, format_duration(item.duration))];
        if let Some(published) = item.published_at {
            meta.push(published.format("published %e %B %Y").to_string());
        }
        if !item.language.is_empty() {
            meta.push(item.language.clone());
        }
        if !item.copyright.is_empty() {
            meta.push(format!("© {}", item.copyright));
        }
        lines.push(Line::from(Span::styled(meta.join("  ·  "), style_secondary())));

        if !item.tags.is_empty() {
            lines.push(Line::from(Span::styled(
                item.tags
                    .iter()
                    .map(|t| format!("#{}", t))
                    .collect::<Vec<_>>()
                    .join(" "),
                Style::default().fg(C_LABEL),
            )));
        }

        lines.push(Line::from(""));
        if !item.description.trim().is_empty() {
            for text_line in item.description.lines() {
                lines.push(Line::from(Span::styled(text_line.to_string(), style_default())));
            }
            lines.push(Line::from(""));
        }

        match item.sources.as_deref().and_then(best_source) {
            Some(source) => {
                let mut spans = vec![
                    Span::styled("download  ", style_muted()),
                    Span::styled(source.mime_type.clone(), Style::default().fg(C_ACCENT)),
                ];
                if let (Some(w), Some(h)) = (source.width, source.height) {
                    spans.push(Span::styled(format!("  {}x{}", w, h), style_secondary()));
                }
                spans.push(Span::styled(format!("  {}", source.url), style_secondary()));
                lines.push(Line::from(spans));
                let variants = item.sources.as_deref().map(|s| s.len()).unwrap_or(0);
                lines.push(Line::from(Span::styled(
                    format!("{} encoded variant(s) available", variants),
                    style_muted(),
                )));
            }
            None => lines.push(Line::from(Span::styled(
                "no downloadable source",
                style_muted(),
            ))),
        }

        if let Some(links) = &item.links {
            lines.push(Line::from(Span::styled(
                format!("legacy statistics: {}", links.legacy_statistics_url),
                style_muted(),
            )));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}
