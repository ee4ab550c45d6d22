use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render a toast notification (brief pop-up message)
///
/// Errors (messages starting with "Error:") render red, everything else
/// green. Toasts auto-dismiss from the main loop.
pub fn render_toast(f: &mut Frame, area: Rect, message: &str) {
    let is_error = message.starts_with("Error:");
    let (icon, color) = if is_error {
        ("✗", Color::Red)
    } else {
        ("✓", Color::Green)
    };

    // Width-aware sizing so long API error messages stay inside the border
    let content_width = message.width() as u16 + 4;
    let toast_width = content_width.min(area.width.saturating_sub(4)).max(20);
    let toast_area = Rect {
        x: area.x + (area.width.saturating_sub(toast_width)) / 2,
        y: area.y + 2,
        width: toast_width,
        height: 3,
    };

    f.render_widget(Clear, toast_area);

    let line = Line::from(vec![
        Span::styled(
            format!("{} ", icon),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(message),
    ]);

    let toast = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    f.render_widget(toast, toast_area);
}
