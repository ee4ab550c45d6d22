//! Pure application model
//!
//! Cloneable state split into focused sub-models:
//!
//! - **MarketModel**: data fetched from the sentiment API
//! - **NavigationModel**: current screen, selections
//! - **UiModel**: dialogs, popups, toast, preferences
//!
//! All I/O lives outside the model; handlers fold API responses in.

pub mod market;
pub mod navigation;
pub mod types;
pub mod ui;

pub use market::MarketModel;
pub use navigation::NavigationModel;
pub use types::*;
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Sentiment API data
    pub market: MarketModel,

    /// Screen and selection state
    pub navigation: NavigationModel,

    /// UI dialogs, toast, preferences
    pub ui: UiModel,
}

impl Model {
    /// Create initial model with default settings
    pub fn new(vim_mode: bool) -> Self {
        Self {
            market: MarketModel::new(),
            navigation: NavigationModel::new(),
            ui: UiModel::new(vim_mode),
        }
    }

    /// Ticker selected on the dashboard (if any)
    pub fn selected_dashboard_ticker(&self) -> Option<&crate::api::TickerConfig> {
        self.navigation
            .dashboard_selection
            .and_then(|idx| self.market.tickers.get(idx))
    }

    /// Ticker selected in the settings list (if any)
    pub fn selected_settings_ticker(&self) -> Option<&crate::api::TickerConfig> {
        self.navigation
            .settings_selection
            .and_then(|idx| self.market.tickers.get(idx))
    }

    /// Articles for the ticker whose detail screen is open
    pub fn detail_articles(&self) -> &[crate::api::Article] {
        match &self.navigation.detail_ticker {
            Some(symbol) => self.market.articles_for(symbol),
            None => &[],
        }
    }

    /// Article selected on the detail screen (if any)
    pub fn selected_article(&self) -> Option<&crate::api::Article> {
        self.navigation
            .article_selection
            .and_then(|idx| self.detail_articles().get(idx))
    }

    /// Check if any modal dialog is showing
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}
