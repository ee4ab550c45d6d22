//! Integration tests for the settings screen's ticker CRUD flow
//!
//! These tests verify the model-level flow:
//! 1. Delete confirmation opens for the selected row
//! 2. A confirmed delete drops the ticker and its cached data
//! 3. Selections stay in bounds after the list shrinks

use sentitui::api::{SentimentSummary, TickerConfig};
use sentitui::model::Model;

fn ticker(symbol: &str, name: &str) -> TickerConfig {
    TickerConfig {
        id: Some(1),
        ticker: symbol.to_string(),
        name: name.to_string(),
        asset_type: "stock".to_string(),
        is_active: 1,
    }
}

fn summary(symbol: &str) -> SentimentSummary {
    SentimentSummary {
        ticker: symbol.to_string(),
        period_days: 7,
        sentiments: vec![],
    }
}

/// Test: delete confirmation targets the selected settings row
#[test]
fn test_delete_confirmation_targets_selected_row() {
    let mut model = Model::new(false);
    model.market.tickers = vec![ticker("GME", "GameStop"), ticker("TSLA", "Tesla")];
    model.navigation.settings_selection = Some(1);

    // Handler logic: 'd' stores the selected symbol in the dialog
    let selected = model.selected_settings_ticker().unwrap().ticker.clone();
    model.ui.confirm_delete = Some(selected);

    assert_eq!(model.ui.confirm_delete.as_deref(), Some("TSLA"));
    assert!(model.has_modal());
}

/// Test: a confirmed delete drops the ticker and every cache keyed by it
#[test]
fn test_confirmed_delete_forgets_ticker_state() {
    let mut model = Model::new(false);
    model.market.tickers = vec![ticker("GME", "GameStop"), ticker("TSLA", "Tesla")];
    model.market.summaries.insert("GME".to_string(), summary("GME"));
    model.market.summaries.insert("TSLA".to_string(), summary("TSLA"));
    model.market.articles.insert("GME".to_string(), vec![]);
    model.navigation.settings_selection = Some(1);
    model.navigation.dashboard_selection = Some(1);

    // Handler logic on DeleteTickerResult Ok
    model.market.forget_ticker("TSLA");
    let count = model.market.tickers.len();
    model.navigation.clamp_ticker_selections(count);

    assert_eq!(model.market.tickers.len(), 1);
    assert!(!model.market.summaries.contains_key("TSLA"));
    assert!(model.market.summaries.contains_key("GME"));
    assert_eq!(model.navigation.settings_selection, Some(0));
    assert_eq!(model.navigation.dashboard_selection, Some(0));
}

/// Test: deleting the last ticker clears the selections entirely
#[test]
fn test_deleting_last_ticker_clears_selection() {
    let mut model = Model::new(false);
    model.market.tickers = vec![ticker("GME", "GameStop")];
    model.navigation.settings_selection = Some(0);

    model.market.forget_ticker("GME");
    model.navigation.clamp_ticker_selections(model.market.tickers.len());

    assert!(model.market.tickers.is_empty());
    assert!(model.navigation.settings_selection.is_none());
}

/// Test: a cancelled confirmation leaves everything untouched
#[test]
fn test_cancelled_delete_keeps_ticker() {
    let mut model = Model::new(false);
    model.market.tickers = vec![ticker("GME", "GameStop")];
    model.ui.confirm_delete = Some("GME".to_string());

    // Handler logic: 'n' just closes the dialog
    model.ui.confirm_delete = None;

    assert_eq!(model.market.tickers.len(), 1);
    assert!(!model.has_modal());
}

/// Test: a fresh ticker list from the server replaces stale cached data
#[test]
fn test_ticker_refresh_prunes_stale_caches() {
    let mut model = Model::new(false);
    model.market.summaries.insert("OLD".to_string(), summary("OLD"));
    model.market.articles.insert("OLD".to_string(), vec![]);

    // Handler logic on TickersResult Ok: replace list, retain known keys
    model.market.tickers = vec![ticker("GME", "GameStop")];
    model.market.tickers_loaded = true;
    let known: Vec<String> = model.market.tickers.iter().map(|t| t.ticker.clone()).collect();
    model.market.summaries.retain(|k, _| known.contains(k));
    model.market.articles.retain(|k, _| known.contains(k));

    assert!(model.market.summaries.is_empty());
    assert!(model.market.articles.is_empty());
    assert!(model.market.tickers_loaded);
}
