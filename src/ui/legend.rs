use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::navigation::Screen;

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(
    screen: Screen,
    vim_mode: bool,
    processing: bool,
    has_open_command: bool,
) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    let nav_key = if vim_mode { "j/k" } else { "↑/↓" };
    hotkey_spans.extend(vec![
        Span::styled(nav_key, Style::default().fg(Color::Yellow)),
        Span::raw(":Nav  "),
    ]);

    match screen {
        Screen::Dashboard => {
            hotkey_spans.extend(vec![
                Span::styled("Enter", Style::default().fg(Color::Yellow)),
                Span::raw(":Open  "),
            ]);
            if !processing {
                hotkey_spans.extend(vec![
                    Span::styled("u", Style::default().fg(Color::Yellow)),
                    Span::raw(":Update All News  "),
                ]);
            }
            hotkey_spans.extend(vec![
                Span::styled("r", Style::default().fg(Color::Yellow)),
                Span::raw(":Reload  "),
                Span::styled("Tab", Style::default().fg(Color::Yellow)),
                Span::raw(":Settings  "),
            ]);
        }
        Screen::TickerDetail => {
            hotkey_spans.extend(vec![
                Span::styled("Enter", Style::default().fg(Color::Yellow)),
                Span::raw(":Read  "),
                Span::styled("f", Style::default().fg(Color::Yellow)),
                Span::raw(":Filter  "),
            ]);
            if !processing {
                hotkey_spans.extend(vec![
                    Span::styled("r", Style::default().fg(Color::Yellow)),
                    Span::raw(":Refresh News  "),
                ]);
            }
            if has_open_command {
                hotkey_spans.extend(vec![
                    Span::styled("o", Style::default().fg(Color::Yellow)),
                    Span::raw(":Open URL  "),
                ]);
            }
            hotkey_spans.extend(vec![
                Span::styled("Esc", Style::default().fg(Color::Yellow)),
                Span::raw(":Back  "),
            ]);
        }
        Screen::Settings => {
            hotkey_spans.extend(vec![
                Span::styled("a", Style::default().fg(Color::Yellow)),
                Span::raw(":Add Ticker  "),
                Span::styled("d", Style::default().fg(Color::Yellow)),
                Span::raw(":Delete  "),
                Span::styled("Esc", Style::default().fg(Color::Yellow)),
                Span::raw(":Dashboard  "),
            ]);
        }
    }

    hotkey_spans.extend(vec![
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Render the one-line hotkey legend
pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    screen: Screen,
    vim_mode: bool,
    processing: bool,
    has_open_command: bool,
) {
    let spans = build_hotkey_spans(screen, vim_mode, processing, has_open_command);
    let legend = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::Gray));
    f.render_widget(legend, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_dashboard_legend_has_update_key() {
        let spans = build_hotkey_spans(Screen::Dashboard, false, false, false);
        let text = rendered(&spans);
        assert!(text.contains("u:Update All News"));
        assert!(text.contains("q:Quit"));
    }

    #[test]
    fn test_update_key_hidden_while_processing() {
        let spans = build_hotkey_spans(Screen::Dashboard, false, true, false);
        let text = rendered(&spans);
        assert!(!text.contains("u:Update All News"));
    }

    #[test]
    fn test_detail_legend_open_url_gated_on_command() {
        let without = rendered(&build_hotkey_spans(Screen::TickerDetail, false, false, false));
        assert!(!without.contains("o:Open URL"));

        let with = rendered(&build_hotkey_spans(Screen::TickerDetail, false, false, true));
        assert!(with.contains("o:Open URL"));
    }

    #[test]
    fn test_vim_mode_changes_nav_hint() {
        let text = rendered(&build_hotkey_spans(Screen::Settings, true, false, false));
        assert!(text.contains("j/k:Nav"));
    }
}
