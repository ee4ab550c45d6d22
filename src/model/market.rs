//! Market data model
//!
//! This sub-model contains everything fetched from the sentiment API:
//! tickers, per-ticker summaries and articles, health, connection state.

use std::collections::HashMap;

use crate::api::{Article, HealthStatus, SentimentSummary, TickerConfig};
use crate::logic::errors::ErrorType;

/// Connection state for the sentiment API
#[derive(Clone, Debug, PartialEq)]
pub enum ConnectionState {
    /// Successfully talked to the API
    Connected,
    /// Initial load still in flight
    Connecting,
    /// Last call failed (with error type and user-facing message)
    Disconnected {
        error_type: ErrorType,
        message: String,
    },
}

/// Data fetched from the sentiment REST API
#[derive(Clone, Debug)]
pub struct MarketModel {
    /// Monitored tickers, in server order
    pub tickers: Vec<TickerConfig>,

    /// Sentiment summary per ticker symbol
    pub summaries: HashMap<String, SentimentSummary>,

    /// Latest articles per ticker symbol
    pub articles: HashMap<String, Vec<Article>>,

    /// Full article fetched for the reading popup
    pub article_detail: Option<Article>,

    /// Whether the initial ticker list has been loaded at least once
    pub tickers_loaded: bool,

    /// Connection state to the API
    pub connection_state: ConnectionState,

    /// Last health probe result
    pub health: Option<HealthStatus>,

    /// A process-news run is in flight (disables re-triggering)
    pub processing: bool,
}

impl MarketModel {
    pub fn new() -> Self {
        Self {
            tickers: Vec::new(),
            summaries: HashMap::new(),
            articles: HashMap::new(),
            article_detail: None,
            tickers_loaded: false,
            connection_state: ConnectionState::Connecting,
            health: None,
            processing: false,
        }
    }

    /// Get a ticker config by symbol
    pub fn get_ticker(&self, symbol: &str) -> Option<&TickerConfig> {
        self.tickers.iter().find(|t| t.ticker == symbol)
    }

    /// Whether every known ticker has a loaded summary (fan-in complete)
    pub fn summaries_loaded(&self) -> bool {
        !self.tickers.is_empty()
            && self
                .tickers
                .iter()
                .all(|t| self.summaries.contains_key(&t.ticker))
    }

    /// Articles currently loaded for a ticker (empty slice when none)
    pub fn articles_for(&self, symbol: &str) -> &[Article] {
        self.articles
            .get(symbol)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Drop state for a ticker that was deleted server-side
    pub fn forget_ticker(&mut self, symbol: &str) {
        self.tickers.retain(|t| t.ticker != symbol);
        self.summaries.remove(symbol);
        self.articles.remove(symbol);
    }
}

impl Default for MarketModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker(symbol: &str) -> TickerConfig {
        TickerConfig {
            id: Some(1),
            ticker: symbol.to_string(),
            name: symbol.to_string(),
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

    #[test]
    fn test_market_model_creation() {
        let model = MarketModel::new();
        assert!(model.tickers.is_empty());
        assert!(!model.tickers_loaded);
        assert_eq!(model.connection_state, ConnectionState::Connecting);
        assert!(!model.processing);
    }

    #[test]
    fn test_get_ticker() {
        let mut model = MarketModel::new();
        model.tickers = vec![ticker("GME"), ticker("TSLA")];
        assert!(model.get_ticker("TSLA").is_some());
        assert!(model.get_ticker("AAPL").is_none());
    }

    #[test]
    fn test_summaries_loaded_fan_in() {
        let mut model = MarketModel::new();
        assert!(!model.summaries_loaded()); // no tickers yet

        model.tickers = vec![ticker("GME"), ticker("TSLA")];
        assert!(!model.summaries_loaded());

        model.summaries.insert("GME".to_string(), summary("GME"));
        assert!(!model.summaries_loaded()); // one of two

        model.summaries.insert("TSLA".to_string(), summary("TSLA"));
        assert!(model.summaries_loaded());
    }

    #[test]
    fn test_articles_for_missing_ticker_is_empty() {
        let model = MarketModel::new();
        assert!(model.articles_for("GME").is_empty());
    }

    #[test]
    fn test_forget_ticker() {
        let mut model = MarketModel::new();
        model.tickers = vec![ticker("GME"), ticker("TSLA")];
        model.summaries.insert("GME".to_string(), summary("GME"));
        model.articles.insert("GME".to_string(), vec![]);

        model.forget_ticker("GME");
        assert_eq!(model.tickers.len(), 1);
        assert!(model.summaries.is_empty());
        assert!(model.articles.is_empty());
    }
}
