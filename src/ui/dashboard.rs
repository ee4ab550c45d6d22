use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use std::collections::HashMap;

use crate::api::{SentimentSummary, TickerConfig};
use crate::logic::formatting::truncate_to_width;
use crate::logic::sentiment::{extract_counts, positive_percentage};

const CARD_HEIGHT: u16 = 7;
const CARD_MIN_WIDTH: u16 = 34;

fn asset_type_style(asset_type: &str) -> Style {
    match asset_type {
        "crypto" => Style::default().fg(Color::Magenta),
        _ => Style::default().fg(Color::Blue),
    }
}

/// Render the grid of ticker cards
///
/// Cards flow left-to-right, top-to-bottom. When there are more rows than
/// fit, the grid scrolls so the selected card stays visible.
pub fn render_ticker_grid(
    f: &mut Frame,
    area: Rect,
    tickers: &[TickerConfig],
    summaries: &HashMap<String, SentimentSummary>,
    selected: Option<usize>,
) {
    if tickers.is_empty() {
        let empty = Paragraph::new("No tickers configured. Press Tab to open Settings and add one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Tickers"));
        f.render_widget(empty, area);
        return;
    }

    let columns = ((area.width / CARD_MIN_WIDTH).max(1)) as usize;
    let visible_rows = ((area.height / CARD_HEIGHT).max(1)) as usize;
    let total_rows = tickers.len().div_ceil(columns);

    // Scroll so the selected card's row is visible
    let selected_row = selected.unwrap_or(0) / columns;
    let first_row = if selected_row >= visible_rows {
        selected_row + 1 - visible_rows
    } else {
        0
    };
    let last_row = (first_row + visible_rows).min(total_rows);

    let row_constraints: Vec<Constraint> = (first_row..last_row)
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    for (area_idx, row) in (first_row..last_row).enumerate() {
        let col_constraints: Vec<Constraint> = (0..columns)
            .map(|_| Constraint::Ratio(1, columns as u32))
            .collect();
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints)
            .split(row_areas[area_idx]);

        for col in 0..columns {
            let idx = row * columns + col;
            if idx >= tickers.len() {
                break;
            }
            render_ticker_card(
                f,
                col_areas[col],
                &tickers[idx],
                summaries.get(&tickers[idx].ticker),
                selected == Some(idx),
            );
        }
    }
}

fn render_ticker_card(
    f: &mut Frame,
    area: Rect,
    config: &TickerConfig,
    summary: Option<&SentimentSummary>,
    is_selected: bool,
) {
    let border_style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", config.ticker),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("[{}] ", config.asset_type),
            asset_type_style(&config.asset_type),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Company name
            Constraint::Length(1), // Counts
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Gauge / no-data line
            Constraint::Min(0),
        ])
        .split(inner);

    let name = truncate_to_width(&config.name, inner.width as usize);
    f.render_widget(
        Paragraph::new(name).style(Style::default().fg(Color::White)),
        chunks[0],
    );

    match summary {
        Some(summary) => {
            let counts = extract_counts(summary);
            let counts_line = Line::from(vec![
                Span::styled(
                    format!("▲ {} positive", counts.positive),
                    Style::default().fg(Color::Green),
                ),
                Span::raw("   "),
                Span::styled(
                    format!("▼ {} negative", counts.negative),
                    Style::default().fg(Color::Red),
                ),
            ]);
            f.render_widget(Paragraph::new(counts_line), chunks[1]);

            if counts.total() > 0 {
                let pct = positive_percentage(counts);
                let gauge = Gauge::default()
                    .gauge_style(Style::default().fg(Color::Green).bg(Color::Red))
                    .ratio(f64::from(pct) / 100.0)
                    .label(format!("{}% positive", pct));
                f.render_widget(gauge, chunks[3]);
            } else {
                f.render_widget(
                    Paragraph::new("No recent articles")
                        .style(Style::default().fg(Color::DarkGray)),
                    chunks[3],
                );
            }
        }
        None => {
            f.render_widget(
                Paragraph::new("Loading...").style(Style::default().fg(Color::DarkGray)),
                chunks[1],
            );
        }
    }
}
