use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::logic::sentiment::ChartGroup;

const BAR_WIDTH: u16 = 5;
const BAR_GAP: u16 = 1;
const GROUP_GAP: u16 = 3;

/// Horizontal cells one ticker group occupies (two bars + gaps)
fn group_width() -> u16 {
    BAR_WIDTH * 2 + BAR_GAP + GROUP_GAP
}

/// Render the grouped positive/negative bar chart across tickers
pub fn render_sentiment_chart(f: &mut Frame, area: Rect, series: &[ChartGroup], period_days: u32) {
    let title = Line::from(vec![
        Span::raw(format!("Sentiment, last {} days  ", period_days)),
        Span::styled("■ positive", Style::default().fg(Color::Green)),
        Span::raw("  "),
        Span::styled("■ negative", Style::default().fg(Color::Red)),
    ]);

    let block = Block::default().borders(Borders::ALL).title(title);

    if series.is_empty() {
        let empty = Paragraph::new("No sentiment data available")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    // Show as many ticker groups as fit the width
    let inner_width = area.width.saturating_sub(2);
    let fit = ((inner_width / group_width()).max(1)) as usize;
    let visible = &series[..series.len().min(fit)];

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .group_gap(GROUP_GAP);

    for group in visible {
        let bars = [
            Bar::default()
                .value(group.positive)
                .style(Style::default().fg(Color::Green))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            Bar::default()
                .value(group.negative)
                .style(Style::default().fg(Color::Red))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                ),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(group.ticker.as_str()))
                .bars(&bars),
        );
    }

    f.render_widget(chart, area);
}
