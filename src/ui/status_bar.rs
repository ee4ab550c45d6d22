use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::logic::sentiment::{positive_percentage, SentimentCounts};
use crate::model::market::ConnectionState;
use crate::model::navigation::Screen;
use crate::model::types::SentimentFilter;

/// Render the bottom status bar
///
/// Shows the API connection state plus per-screen context: the selected
/// ticker's counts on the dashboard, the article count and filter on the
/// detail screen, the ticker count on settings.
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    screen: Screen,
    connection_state: &ConnectionState,
    processing: bool,
    ticker_count: usize,
    dashboard_selected: Option<(&str, SentimentCounts)>,
    detail: Option<(&str, usize, SentimentFilter)>,
) {
    let mut spans: Vec<Span> = vec![];

    let push_metric = |spans: &mut Vec<Span>, label: &'static str, value: String, style: Style| {
        if !spans.is_empty() {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(label, Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(format!(" {}", value), style));
    };

    match connection_state {
        ConnectionState::Connected => {
            push_metric(
                &mut spans,
                "API:",
                "Connected".to_string(),
                Style::default().fg(Color::Green),
            );
        }
        ConnectionState::Connecting => {
            push_metric(
                &mut spans,
                "API:",
                "Connecting...".to_string(),
                Style::default().fg(Color::Gray),
            );
        }
        ConnectionState::Disconnected { message, .. } => {
            push_metric(
                &mut spans,
                "API:",
                message.clone(),
                Style::default().fg(Color::Red),
            );
        }
    }

    match screen {
        Screen::Dashboard => {
            push_metric(
                &mut spans,
                "Tickers:",
                ticker_count.to_string(),
                Style::default(),
            );
            if let Some((symbol, counts)) = dashboard_selected {
                let value = if counts.total() > 0 {
                    format!(
                        "{} ({} articles, {}% positive)",
                        symbol,
                        counts.total(),
                        positive_percentage(counts)
                    )
                } else {
                    format!("{} (no recent articles)", symbol)
                };
                push_metric(&mut spans, "Selected:", value, Style::default());
            }
        }
        Screen::TickerDetail => {
            if let Some((symbol, article_count, filter)) = detail {
                push_metric(&mut spans, "Ticker:", symbol.to_string(), Style::default());
                push_metric(
                    &mut spans,
                    "Articles:",
                    article_count.to_string(),
                    Style::default(),
                );
                push_metric(
                    &mut spans,
                    "Filter:",
                    filter.label().to_string(),
                    Style::default(),
                );
            }
        }
        Screen::Settings => {
            push_metric(
                &mut spans,
                "Tickers:",
                ticker_count.to_string(),
                Style::default(),
            );
        }
    }

    if processing {
        if !spans.is_empty() {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(
            "Processing news...",
            Style::default().fg(Color::Yellow),
        ));
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}
