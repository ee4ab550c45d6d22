use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::api::HealthStatus;
use crate::model::navigation::Screen;

fn tab_span(label: &'static str, active: bool) -> Span<'static> {
    if active {
        Span::styled(
            format!(" {} ", label),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!(" {} ", label), Style::default().fg(Color::Gray))
    }
}

/// Render the top navigation bar: screen tabs plus the API health indicator
pub fn render_nav_bar(
    f: &mut Frame,
    area: Rect,
    screen: Screen,
    detail_ticker: Option<&str>,
    health: Option<&HealthStatus>,
) {
    let mut spans = vec![
        tab_span("Dashboard", matches!(screen, Screen::Dashboard | Screen::TickerDetail)),
        Span::raw(" "),
        tab_span("Settings", screen == Screen::Settings),
    ];

    if screen == Screen::TickerDetail {
        if let Some(symbol) = detail_ticker {
            spans.push(Span::raw(" › "));
            spans.push(Span::styled(
                symbol.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        }
    }

    // Health indicator on the right side of the same line
    spans.push(Span::raw("   "));
    match health {
        Some(status) if status.status == "healthy" => {
            spans.push(Span::styled("● API healthy", Style::default().fg(Color::Green)));
        }
        Some(status) => {
            spans.push(Span::styled(
                format!("● API {}", status.status),
                Style::default().fg(Color::Yellow),
            ));
        }
        None => {
            spans.push(Span::styled("○ API unreachable", Style::default().fg(Color::Red)));
        }
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("News Sentiment"),
    );

    f.render_widget(bar, area);
}
