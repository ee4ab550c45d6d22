//! Sentiment aggregation helpers
//!
//! Pure functions that turn API sentiment summaries into the numbers the
//! dashboard renders: per-ticker positive/negative counts, the positive
//! percentage gauge, and the grouped bar chart series.

use std::collections::HashMap;

use crate::api::{SentimentSummary, TickerConfig};

pub const POSITIVE: &str = "POSITIVE";
pub const NEGATIVE: &str = "NEGATIVE";

/// Positive/negative article counts extracted from a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SentimentCounts {
    pub positive: u64,
    pub negative: u64,
}

impl SentimentCounts {
    pub fn total(&self) -> u64 {
        self.positive + self.negative
    }
}

/// Extract positive/negative counts from a summary. Labels the server sends
/// beyond POSITIVE/NEGATIVE are ignored for display purposes.
pub fn extract_counts(summary: &SentimentSummary) -> SentimentCounts {
    let mut counts = SentimentCounts::default();
    for bucket in &summary.sentiments {
        match bucket.label.as_str() {
            POSITIVE => counts.positive += bucket.count,
            NEGATIVE => counts.negative += bucket.count,
            _ => {}
        }
    }
    counts
}

/// Percentage of positive articles, rounded. A ticker with no recent
/// articles reads as 50 (neutral) rather than 0.
pub fn positive_percentage(counts: SentimentCounts) -> u16 {
    let total = counts.total();
    if total == 0 {
        return 50;
    }
    ((counts.positive as f64 / total as f64) * 100.0).round() as u16
}

/// One bar-chart group: ticker symbol plus its positive/negative counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartGroup {
    pub ticker: String,
    pub positive: u64,
    pub negative: u64,
}

/// Build the chart series in ticker order. Tickers without a loaded summary
/// contribute zero-height bars so the chart shape stays stable while
/// summaries stream in.
pub fn build_chart_series(
    tickers: &[TickerConfig],
    summaries: &HashMap<String, SentimentSummary>,
) -> Vec<ChartGroup> {
    tickers
        .iter()
        .map(|config| {
            let counts = summaries
                .get(&config.ticker)
                .map(extract_counts)
                .unwrap_or_default();
            ChartGroup {
                ticker: config.ticker.clone(),
                positive: counts.positive,
                negative: counts.negative,
            }
        })
        .collect()
}

/// Largest bar value across the series (used to scale the chart's y axis).
pub fn chart_max(series: &[ChartGroup]) -> u64 {
    series
        .iter()
        .map(|group| group.positive.max(group.negative))
        .max()
        .unwrap_or(0)
}
