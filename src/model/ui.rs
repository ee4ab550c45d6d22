//! UI Model
//!
//! Preferences, dialogs, popups, and visual state.

use std::time::Instant;

use super::types::{SentimentFilter, TickerFormState};

/// Toast lifetime in milliseconds before auto-dismiss
const TOAST_LIFETIME_MS: u128 = 1500;

#[derive(Clone, Debug)]
pub struct UiModel {
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Sentiment filter on the detail screen's article list
    pub sentiment_filter: SentimentFilter,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Delete confirmation dialog (ticker symbol)
    pub confirm_delete: Option<String>,

    /// Add-ticker form dialog
    pub ticker_form: Option<TickerFormState>,

    /// Whether the full-article popup is open
    pub article_popup: bool,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            sentiment_filter: SentimentFilter::All,
            confirm_delete: None,
            ticker_form: None,
            article_popup: false,
            toast_message: None,
            should_quit: false,
        }
    }

    /// Check if any modal dialog is currently showing
    pub fn has_modal(&self) -> bool {
        self.confirm_delete.is_some() || self.ticker_form.is_some() || self.article_popup
    }

    /// Close all modal dialogs
    pub fn close_all_modals(&mut self) {
        self.confirm_delete = None;
        self.ticker_form = None;
        self.article_popup = false;
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        match &self.toast_message {
            Some((_, timestamp)) => timestamp.elapsed().as_millis() >= TOAST_LIFETIME_MS,
            None => false,
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
