//! Integration tests for the dashboard's summary fan-out / fan-in
//!
//! The dashboard loads the ticker list, then issues one summary request per
//! ticker; results fold in one at a time and the chart must stay stable
//! while they stream in.

use std::collections::HashMap;

use sentitui::api::{SentimentBucket, SentimentSummary, TickerConfig};
use sentitui::logic::sentiment::{build_chart_series, chart_max, extract_counts, positive_percentage};
use sentitui::model::market::ConnectionState;
use sentitui::model::Model;

fn ticker(symbol: &str) -> TickerConfig {
    TickerConfig {
        id: Some(1),
        ticker: symbol.to_string(),
        name: symbol.to_string(),
        asset_type: "stock".to_string(),
        is_active: 1,
    }
}

fn summary(symbol: &str, positive: u64, negative: u64) -> SentimentSummary {
    SentimentSummary {
        ticker: symbol.to_string(),
        period_days: 7,
        sentiments: vec![
            SentimentBucket {
                label: "POSITIVE".to_string(),
                count: positive,
                avg_score: 0.9,
            },
            SentimentBucket {
                label: "NEGATIVE".to_string(),
                count: negative,
                avg_score: 0.8,
            },
        ],
    }
}

/// Test: fan-in completes only once every ticker has a summary
#[test]
fn test_fan_in_completes_when_all_summaries_arrive() {
    let mut model = Model::new(false);
    model.market.tickers = vec![ticker("GME"), ticker("TSLA"), ticker("BTC-USD")];
    assert!(!model.market.summaries_loaded());

    // Summaries arrive out of order, one response at a time
    model
        .market
        .summaries
        .insert("BTC-USD".to_string(), summary("BTC-USD", 1, 1));
    assert!(!model.market.summaries_loaded());

    model
        .market
        .summaries
        .insert("GME".to_string(), summary("GME", 6, 2));
    assert!(!model.market.summaries_loaded());

    model
        .market
        .summaries
        .insert("TSLA".to_string(), summary("TSLA", 3, 5));
    assert!(model.market.summaries_loaded());
}

/// Test: chart series keeps every ticker visible while summaries stream in
#[test]
fn test_chart_series_stable_during_fan_in() {
    let tickers = vec![ticker("GME"), ticker("TSLA")];
    let mut summaries = HashMap::new();

    // Only one summary loaded so far
    summaries.insert("GME".to_string(), summary("GME", 6, 2));

    let series = build_chart_series(&tickers, &summaries);
    assert_eq!(series.len(), 2, "Both tickers appear in the chart");
    assert_eq!(series[0].positive, 6);
    assert_eq!(series[1].positive, 0, "Pending ticker shows empty bars");
    assert_eq!(chart_max(&series), 6);
}

/// Test: card numbers match the summary buckets
#[test]
fn test_card_counts_and_percentage() {
    let s = summary("GME", 6, 2);
    let counts = extract_counts(&s);

    assert_eq!(counts.positive, 6);
    assert_eq!(counts.negative, 2);
    assert_eq!(positive_percentage(counts), 75);
}

/// Test: a failed summary fetch marks the API disconnected but keeps data
#[test]
fn test_summary_failure_keeps_loaded_data() {
    let mut model = Model::new(false);
    model.market.tickers = vec![ticker("GME"), ticker("TSLA")];
    model
        .market
        .summaries
        .insert("GME".to_string(), summary("GME", 6, 2));
    model.market.connection_state = ConnectionState::Connected;

    // Handler logic on SummaryResult Err
    model.market.connection_state = ConnectionState::Disconnected {
        error_type: sentitui::logic::errors::ErrorType::ConnectionRefused,
        message: "connection refused".to_string(),
    };

    // The already-loaded summary is still there for rendering
    assert!(model.market.summaries.contains_key("GME"));
    assert!(matches!(
        model.market.connection_state,
        ConnectionState::Disconnected { .. }
    ));
}

/// Test: a later refresh overwrites a ticker's previous summary
#[test]
fn test_refresh_overwrites_summary() {
    let mut model = Model::new(false);
    model.market.tickers = vec![ticker("GME")];
    model
        .market
        .summaries
        .insert("GME".to_string(), summary("GME", 1, 1));

    model
        .market
        .summaries
        .insert("GME".to_string(), summary("GME", 4, 0));

    let counts = extract_counts(model.market.summaries.get("GME").unwrap());
    assert_eq!(counts.positive, 4);
    assert_eq!(counts.negative, 0);
}
