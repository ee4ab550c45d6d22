//! Navigation model
//!
//! Which screen is showing and what is selected on each of them.

use crate::logic::navigation::{clamp_selection, next_selection, prev_selection};

/// Top-level screens, mirroring the dashboard's routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    TickerDetail,
    Settings,
}

#[derive(Clone, Debug, Default)]
pub struct NavigationModel {
    /// Currently visible screen
    pub screen: Screen,

    /// Selected card on the dashboard
    pub dashboard_selection: Option<usize>,

    /// Selected row in the settings ticker list
    pub settings_selection: Option<usize>,

    /// Selected article on the detail screen
    pub article_selection: Option<usize>,

    /// Ticker whose detail screen is open
    pub detail_ticker: Option<String>,
}

impl NavigationModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the detail screen for a ticker, resetting the article cursor.
    pub fn open_detail(&mut self, symbol: String) {
        self.detail_ticker = Some(symbol);
        self.article_selection = None;
        self.screen = Screen::TickerDetail;
    }

    /// Leave the detail screen back to the dashboard.
    pub fn close_detail(&mut self) {
        self.detail_ticker = None;
        self.article_selection = None;
        self.screen = Screen::Dashboard;
    }

    pub fn select_next_ticker(&mut self, ticker_count: usize) {
        self.dashboard_selection = next_selection(self.dashboard_selection, ticker_count);
    }

    pub fn select_prev_ticker(&mut self, ticker_count: usize) {
        self.dashboard_selection = prev_selection(self.dashboard_selection, ticker_count);
    }

    pub fn select_next_article(&mut self, article_count: usize) {
        self.article_selection = next_selection(self.article_selection, article_count);
    }

    pub fn select_prev_article(&mut self, article_count: usize) {
        self.article_selection = prev_selection(self.article_selection, article_count);
    }

    pub fn select_next_setting(&mut self, ticker_count: usize) {
        self.settings_selection = next_selection(self.settings_selection, ticker_count);
    }

    pub fn select_prev_setting(&mut self, ticker_count: usize) {
        self.settings_selection = prev_selection(self.settings_selection, ticker_count);
    }

    /// Re-fit all selections after the ticker list changed.
    pub fn clamp_ticker_selections(&mut self, ticker_count: usize) {
        self.dashboard_selection = clamp_selection(self.dashboard_selection, ticker_count);
        self.settings_selection = clamp_selection(self.settings_selection, ticker_count);
    }

    pub fn clamp_article_selection(&mut self, article_count: usize) {
        self.article_selection = clamp_selection(self.article_selection, article_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_model_creation() {
        let nav = NavigationModel::new();
        assert_eq!(nav.screen, Screen::Dashboard);
        assert!(nav.dashboard_selection.is_none());
        assert!(nav.detail_ticker.is_none());
    }

    #[test]
    fn test_open_and_close_detail() {
        let mut nav = NavigationModel::new();
        nav.article_selection = Some(3);

        nav.open_detail("GME".to_string());
        assert_eq!(nav.screen, Screen::TickerDetail);
        assert_eq!(nav.detail_ticker.as_deref(), Some("GME"));
        assert!(nav.article_selection.is_none());

        nav.close_detail();
        assert_eq!(nav.screen, Screen::Dashboard);
        assert!(nav.detail_ticker.is_none());
    }

    #[test]
    fn test_ticker_selection_wraps() {
        let mut nav = NavigationModel::new();
        nav.select_next_ticker(2);
        assert_eq!(nav.dashboard_selection, Some(0));
        nav.select_next_ticker(2);
        assert_eq!(nav.dashboard_selection, Some(1));
        nav.select_next_ticker(2);
        assert_eq!(nav.dashboard_selection, Some(0));
        nav.select_prev_ticker(2);
        assert_eq!(nav.dashboard_selection, Some(1));
    }

    #[test]
    fn test_clamp_after_delete() {
        let mut nav = NavigationModel::new();
        nav.dashboard_selection = Some(4);
        nav.settings_selection = Some(4);

        nav.clamp_ticker_selections(3);
        assert_eq!(nav.dashboard_selection, Some(2));
        assert_eq!(nav.settings_selection, Some(2));

        nav.clamp_ticker_selections(0);
        assert!(nav.dashboard_selection.is_none());
        assert!(nav.settings_selection.is_none());
    }
}
