use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::api::Article;
use crate::logic::formatting::{format_article_date, format_score};
use crate::model::types::{AssetType, FormField, TickerFormState};

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Render the delete-ticker confirmation dialog
pub fn render_delete_confirmation(f: &mut Frame, symbol: &str) {
    let prompt_text = format!(
        "Delete ticker {}?\n\n\
        Its articles stay on the server but it will no longer\n\
        be monitored.\n\n\
        Continue? (y/n)",
        symbol
    );

    let prompt_area = centered_rect(f.area(), 56, 9);

    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm Delete")
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

fn field_block(title: &'static str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style)
}

/// Render the add-ticker form dialog
pub fn render_ticker_form(f: &mut Frame, form: &TickerFormState) {
    let dialog_area = centered_rect(f.area(), 50, 14);
    f.render_widget(Clear, dialog_area);

    let outer_title = if form.submitting {
        "Add Ticker (submitting...)"
    } else {
        "Add Ticker"
    };
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(outer_title)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = outer.inner(dialog_area);
    f.render_widget(outer, dialog_area);

    let rows = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            ratatui::layout::Constraint::Length(3), // Symbol
            ratatui::layout::Constraint::Length(3), // Name
            ratatui::layout::Constraint::Length(3), // Asset type
            ratatui::layout::Constraint::Length(1), // Help line
            ratatui::layout::Constraint::Min(0),
        ])
        .split(inner);

    let symbol_text = if form.symbol.is_empty() && form.focus != FormField::Symbol {
        Span::styled("e.g. AAPL", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(form.symbol.clone())
    };
    f.render_widget(
        Paragraph::new(Line::from(symbol_text))
            .block(field_block("Ticker Symbol", form.focus == FormField::Symbol)),
        rows[0],
    );

    let name_text = if form.name.is_empty() && form.focus != FormField::Name {
        Span::styled("e.g. Apple Inc.", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(form.name.clone())
    };
    f.render_widget(
        Paragraph::new(Line::from(name_text))
            .block(field_block("Name", form.focus == FormField::Name)),
        rows[1],
    );

    let type_line = Line::from(vec![
        Span::styled(
            " stock ",
            if form.asset_type == AssetType::Stock {
                Style::default().fg(Color::Black).bg(Color::Blue)
            } else {
                Style::default().fg(Color::Gray)
            },
        ),
        Span::raw("  "),
        Span::styled(
            " crypto ",
            if form.asset_type == AssetType::Crypto {
                Style::default().fg(Color::Black).bg(Color::Magenta)
            } else {
                Style::default().fg(Color::Gray)
            },
        ),
    ]);
    f.render_widget(
        Paragraph::new(type_line)
            .block(field_block("Asset Type", form.focus == FormField::AssetType)),
        rows[2],
    );

    let help = Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(":Next field  "),
        Span::styled("Space", Style::default().fg(Color::Yellow)),
        Span::raw(":Toggle type  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(":Add  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(":Cancel"),
    ]);
    f.render_widget(Paragraph::new(help), rows[3]);
}

/// Render the full-article reading popup
///
/// Shows the fetched article when available, falling back to the list row's
/// data while the fetch is in flight.
pub fn render_article_popup(f: &mut Frame, article: Option<&Article>, fallback: Option<&Article>) {
    let area = f.area();
    let popup_area = centered_rect(
        area,
        (area.width * 4 / 5).max(40),
        (area.height * 4 / 5).max(10),
    );
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Full Article")
        .border_style(Style::default().fg(Color::Cyan));

    let Some(article) = article.or(fallback) else {
        let loading = Paragraph::new("Loading article...")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(loading, popup_area);
        return;
    };

    let mut lines = vec![Line::from(Span::styled(
        article.title.as_deref().unwrap_or("Untitled").to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    let mut meta = vec![];
    if let Some(label) = article.sentiment_label.as_deref() {
        let text = match article.sentiment_score {
            Some(score) => format!("{} ({})", label, format_score(score)),
            None => label.to_string(),
        };
        meta.push(Span::styled(
            text,
            super::articles::sentiment_style(Some(label)),
        ));
    }
    if let Some(created_at) = article.created_at.as_deref() {
        if !meta.is_empty() {
            meta.push(Span::raw("  "));
        }
        meta.push(Span::styled(
            format_article_date(created_at),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if !meta.is_empty() {
        lines.push(Line::from(meta));
    }

    if let Some(url) = article.url.as_deref() {
        lines.push(Line::from(Span::styled(
            url.to_string(),
            Style::default().fg(Color::Cyan),
        )));
    }

    lines.push(Line::from(""));

    let body = article
        .content
        .as_deref()
        .or(article.summary.as_deref())
        .unwrap_or("No content available");
    for text_line in body.lines() {
        lines.push(Line::from(text_line.to_string()));
    }

    let popup = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(popup, popup_area);
}
