use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::api::Article;
use crate::logic::formatting::{format_article_date, format_score, truncate_to_width};
use crate::model::types::SentimentFilter;

pub fn sentiment_style(label: Option<&str>) -> Style {
    match label.map(str::to_lowercase).as_deref() {
        Some("positive") => Style::default().fg(Color::Green),
        Some("negative") => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::DarkGray),
    }
}

fn sentiment_badge(article: &Article) -> Span<'static> {
    let label = article.sentiment_label.as_deref().unwrap_or("N/A");
    let text = match article.sentiment_score {
        Some(score) => format!("{} ({})", label, format_score(score)),
        None => label.to_string(),
    };
    Span::styled(text, sentiment_style(article.sentiment_label.as_deref()))
}

/// Render the ticker detail screen: article list plus reading pane
pub fn render_ticker_detail(
    f: &mut Frame,
    area: Rect,
    symbol: &str,
    articles: &[Article],
    list_state: &mut ListState,
    filter: SentimentFilter,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_article_list(f, chunks[0], symbol, articles, list_state, filter);

    let selected = list_state.selected().and_then(|idx| articles.get(idx));
    render_reading_pane(f, chunks[1], selected);
}

fn render_article_list(
    f: &mut Frame,
    area: Rect,
    symbol: &str,
    articles: &[Article],
    list_state: &mut ListState,
    filter: SentimentFilter,
) {
    let title = match filter {
        SentimentFilter::All => format!("{} — Latest Articles ({})", symbol, articles.len()),
        _ => format!(
            "{} — {} Articles ({})",
            symbol,
            filter.label(),
            articles.len()
        ),
    };

    if articles.is_empty() {
        let empty = Paragraph::new("No articles found")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(empty, area);
        return;
    }

    // date(10) + gap + badge marker(1) + gap leaves the rest for the title
    let title_width = (area.width.saturating_sub(2 + 10 + 1 + 1 + 2)) as usize;

    let items: Vec<ListItem> = articles
        .iter()
        .map(|article| {
            let date = article
                .created_at
                .as_deref()
                .map(format_article_date)
                .unwrap_or_else(|| "-".repeat(10));
            let headline = article.title.as_deref().unwrap_or("Untitled");

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<10}", date), Style::default().fg(Color::DarkGray)),
                Span::raw(" "),
                Span::styled("●", sentiment_style(article.sentiment_label.as_deref())),
                Span::raw(" "),
                Span::raw(truncate_to_width(headline, title_width)),
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

fn render_reading_pane(f: &mut Frame, area: Rect, article: Option<&Article>) {
    let block = Block::default().borders(Borders::ALL).title("Article");

    let Some(article) = article else {
        let hint = Paragraph::new("Select an article to read its summary")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(hint, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            article.title.as_deref().unwrap_or("Untitled").to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Sentiment: ", Style::default().fg(Color::Yellow)),
            sentiment_badge(article),
        ]),
    ];

    if let Some(created_at) = article.created_at.as_deref() {
        lines.push(Line::from(vec![
            Span::styled("Date: ", Style::default().fg(Color::Yellow)),
            Span::raw(format_article_date(created_at)),
        ]));
    }
    if let Some(url) = article.url.as_deref() {
        lines.push(Line::from(vec![
            Span::styled("URL: ", Style::default().fg(Color::Yellow)),
            Span::styled(url.to_string(), Style::default().fg(Color::Cyan)),
        ]));
    }

    lines.push(Line::from(""));

    // Summary first, the content's opening as a fallback (list rows carry
    // at most a preview; Enter opens the full article)
    let body = article
        .summary
        .as_deref()
        .or(article.content.as_deref())
        .unwrap_or("No summary available");
    for text_line in body.lines() {
        lines.push(Line::from(text_line.to_string()));
    }

    let pane = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(pane, area);
}
