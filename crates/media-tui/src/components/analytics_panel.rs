//! AnalyticsPanel — per-day view chart for one media item.
//!
//! Renders the dense, padded series produced by the aggregator. The series
//! has no gaps, so the x axis is simply the day index.

use ratatui::crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::action::{Action, ComponentId};
use crate::app_state::AppState;
use crate::component::Component;
use crate::theme::{style_muted, style_secondary, C_CHART, C_PANEL_BORDER};
use crate::widgets::pane_chrome::{pane_chrome, Badge};

pub struct AnalyticsPanel;

impl AnalyticsPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Component for AnalyticsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::AnalyticsPanel
    }

    fn handle_key(&mut self, _key: KeyEvent, _state: &AppState) -> Vec<Action> {
        Vec::new()
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        let title = match &state.media_item {
            Some(item) => format!("Views — {}", item.title),
            None => "Views".to_string(),
        };
        let badge = state.loading.then_some(Badge {
            text: "LOADING",
            color: crate::theme::C_SECONDARY,
        });
        let block = pane_chrome(&title, focused, badge);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let series = match &state.analytics {
            Some(series) => series,
            None => {
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled("Loading…", style_muted()))),
                    inner,
                );
                return;
            }
        };

        if series.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "no data available",
                    style_muted(),
                ))),
                inner,
            );
            return;
        }

        let points: Vec<(f64, f64)> = series
            .iter()
            .enumerate()
            .map(|(i, point)| (i as f64, point.views as f64))
            .collect();
        let max_views = series.iter().map(|p| p.views).max().unwrap_or(0).max(1);
        let total: u64 = series.iter().map(|p| p.views).sum();

        let x_labels: Vec<Span> = [
            series.first(),
            series.get(series.len() / 2),
            series.last(),
        ]
        .into_iter()
        .flatten()
        .map(|p| Span::styled(p.date.format("%d %b %y").to_string(), style_secondary()))
        .collect();

        let y_labels: Vec<Span> = [0, max_views / 2, max_views]
            .into_iter()
            .map(|v| Span::styled(v.to_string(), style_secondary()))
            .collect();

        let dataset = Dataset::default()
            .name(format!("{} views", total))
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(C_CHART))
            .data(&points);

        let chart = Chart::new(vec![dataset])
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(C_PANEL_BORDER))
                    .bounds([0.0, (series.len() - 1) as f64])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(C_PANEL_BORDER))
                    .bounds([0.0, max_views as f64])
                    .labels(y_labels),
            );

        frame.render_widget(chart, inner);
    }
}
