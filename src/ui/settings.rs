use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::api::TickerConfig;
use crate::logic::formatting::truncate_to_width;

/// Render the settings screen's monitored-ticker list
pub fn render_settings(
    f: &mut Frame,
    area: Rect,
    tickers: &[TickerConfig],
    list_state: &mut ListState,
) {
    let title = format!("Monitored Tickers ({})", tickers.len());

    if tickers.is_empty() {
        let empty = Paragraph::new("No tickers configured. Press 'a' to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(empty, area);
        return;
    }

    let name_width = (area.width.saturating_sub(2 + 12 + 10 + 10)) as usize;

    let items: Vec<ListItem> = tickers
        .iter()
        .map(|config| {
            let type_style = match config.asset_type.as_str() {
                "crypto" => Style::default().fg(Color::Magenta),
                _ => Style::default().fg(Color::Blue),
            };
            let active = if config.is_active != 0 {
                Span::styled("active", Style::default().fg(Color::Green))
            } else {
                Span::styled("paused", Style::default().fg(Color::DarkGray))
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<12}", config.ticker),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    "{:<width$}",
                    truncate_to_width(&config.name, name_width),
                    width = name_width
                )),
                Span::styled(format!("{:<10}", config.asset_type), type_style),
                active,
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, list_state);
}
