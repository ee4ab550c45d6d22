//! Display formatting helpers

use chrono::{DateTime, NaiveDateTime};
use unicode_width::UnicodeWidthStr;

/// Format an API timestamp as a short date for list rows.
///
/// The server sends ISO 8601 timestamps, with or without a timezone suffix.
/// Unparseable values fall back to the raw string so the row still renders.
pub fn format_article_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return dt.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

/// Format a model confidence score (0.0-1.0) as a percentage, e.g. "98.7%".
pub fn format_score(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Truncate a string to a display width, appending an ellipsis when cut.
/// Width-aware so wide (CJK) characters don't overflow the column.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_article_date_rfc3339() {
        assert_eq!(format_article_date("2026-01-15T09:30:00+00:00"), "2026-01-15");
    }

    #[test]
    fn test_format_article_date_naive() {
        assert_eq!(format_article_date("2026-01-15T09:30:00.123456"), "2026-01-15");
        assert_eq!(format_article_date("2026-01-15 09:30:00"), "2026-01-15");
    }

    #[test]
    fn test_format_article_date_fallback() {
        assert_eq!(format_article_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0.9876), "98.8%");
        assert_eq!(format_score(0.5), "50.0%");
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        let truncated = truncate_to_width("a very long headline here", 10);
        assert!(truncated.ends_with('…'));
        assert!(truncated.width() <= 10);
    }

    #[test]
    fn test_truncate_wide_chars() {
        let truncated = truncate_to_width("株価が急騰した", 6);
        assert!(truncated.width() <= 6);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
