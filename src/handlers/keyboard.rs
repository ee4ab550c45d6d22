//! Keyboard Input Handler
//!
//! Modal dialogs capture input first (confirmation, add form, article
//! popup), then keys dispatch per screen. Arrow keys always work; hjkl and
//! g/G are gated behind vim mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::{NewTicker, ProcessScope};
use crate::logic::ticker::{normalize_symbol, validate_form};
use crate::model::navigation::Screen;
use crate::model::types::FormField;
use crate::services::api::ApiRequest;
use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl-C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return;
    }

    // Delete confirmation prompt
    if let Some(symbol) = app.model.ui.confirm_delete.clone() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                app.model.ui.confirm_delete = None;
                app.request(ApiRequest::DeleteTicker { ticker: symbol });
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.model.ui.confirm_delete = None;
            }
            _ => {
                // Ignore other keys while prompt is showing
            }
        }
        return;
    }

    // Add-ticker form
    if app.model.ui.ticker_form.is_some() {
        handle_form_key(app, key);
        return;
    }

    // Full-article popup
    if app.model.ui.article_popup {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                app.model.ui.article_popup = false;
                app.model.market.article_detail = None;
            }
            KeyCode::Char('o') => {
                app.open_selected_article_url();
            }
            _ => {}
        }
        return;
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
            return;
        }
        KeyCode::Tab => {
            // Navbar toggle between the two linked pages
            app.model.navigation.screen = match app.model.navigation.screen {
                Screen::Settings => Screen::Dashboard,
                _ => Screen::Settings,
            };
            return;
        }
        _ => {}
    }

    match app.model.navigation.screen {
        Screen::Dashboard => handle_dashboard_key(app, key),
        Screen::TickerDetail => handle_detail_key(app, key),
        Screen::Settings => handle_settings_key(app, key),
    }
}

fn is_down(app: &App, code: KeyCode) -> bool {
    code == KeyCode::Down || (app.model.ui.vim_mode && code == KeyCode::Char('j'))
}

fn is_up(app: &App, code: KeyCode) -> bool {
    code == KeyCode::Up || (app.model.ui.vim_mode && code == KeyCode::Char('k'))
}

fn is_back(app: &App, code: KeyCode) -> bool {
    code == KeyCode::Esc
        || code == KeyCode::Left
        || (app.model.ui.vim_mode && code == KeyCode::Char('h'))
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    let ticker_count = app.model.market.tickers.len();

    if is_down(app, key.code) {
        app.model.navigation.select_next_ticker(ticker_count);
        return;
    }
    if is_up(app, key.code) {
        app.model.navigation.select_prev_ticker(ticker_count);
        return;
    }

    match key.code {
        KeyCode::Char('g') if app.model.ui.vim_mode => {
            if ticker_count > 0 {
                app.model.navigation.dashboard_selection = Some(0);
            }
        }
        KeyCode::Char('G') if app.model.ui.vim_mode => {
            if ticker_count > 0 {
                app.model.navigation.dashboard_selection = Some(ticker_count - 1);
            }
        }
        KeyCode::Enter | KeyCode::Right => {
            if let Some(config) = app.model.selected_dashboard_ticker() {
                let symbol = config.ticker.clone();
                app.model.navigation.open_detail(symbol);
                app.reload_detail();
            }
        }
        KeyCode::Char('l') if app.model.ui.vim_mode => {
            if let Some(config) = app.model.selected_dashboard_ticker() {
                let symbol = config.ticker.clone();
                app.model.navigation.open_detail(symbol);
                app.reload_detail();
            }
        }
        KeyCode::Char('u') => {
            // Update All News
            app.trigger_process(ProcessScope::All);
        }
        KeyCode::Char('r') => {
            app.request(ApiRequest::FetchTickers);
        }
        KeyCode::Char('s') => {
            app.model.navigation.screen = Screen::Settings;
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    let article_count = app.model.detail_articles().len();

    if is_down(app, key.code) {
        app.model.navigation.select_next_article(article_count);
        return;
    }
    if is_up(app, key.code) {
        app.model.navigation.select_prev_article(article_count);
        return;
    }
    if is_back(app, key.code) {
        app.model.navigation.close_detail();
        return;
    }

    match key.code {
        KeyCode::Char('g') if app.model.ui.vim_mode => {
            if article_count > 0 {
                app.model.navigation.article_selection = Some(0);
            }
        }
        KeyCode::Char('G') if app.model.ui.vim_mode => {
            if article_count > 0 {
                app.model.navigation.article_selection = Some(article_count - 1);
            }
        }
        KeyCode::Enter => {
            // Open the reading popup; fetch the full article when it has an id
            if let Some(article) = app.model.selected_article() {
                let article_id = article.id;
                app.model.ui.article_popup = true;
                app.model.market.article_detail = None;
                if let Some(article_id) = article_id {
                    app.request(ApiRequest::FetchArticle { article_id });
                }
            }
        }
        KeyCode::Char('o') => {
            app.open_selected_article_url();
        }
        KeyCode::Char('f') => {
            // Cycle the sentiment filter and reload with it applied
            app.model.ui.sentiment_filter = app.model.ui.sentiment_filter.cycle();
            app.model.navigation.article_selection = None;
            app.reload_detail();
        }
        KeyCode::Char('r') => {
            // Refresh News for just this ticker
            if let Some(symbol) = app.model.navigation.detail_ticker.clone() {
                app.trigger_process(ProcessScope::Tickers(vec![symbol]));
            }
        }
        _ => {}
    }
}

fn handle_settings_key(app: &mut App, key: KeyEvent) {
    let ticker_count = app.model.market.tickers.len();

    if is_down(app, key.code) {
        app.model.navigation.select_next_setting(ticker_count);
        return;
    }
    if is_up(app, key.code) {
        app.model.navigation.select_prev_setting(ticker_count);
        return;
    }

    match key.code {
        KeyCode::Esc => {
            app.model.navigation.screen = Screen::Dashboard;
        }
        KeyCode::Char('a') => {
            app.model.ui.ticker_form = Some(Default::default());
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(config) = app.model.selected_settings_ticker() {
                app.model.ui.confirm_delete = Some(config.ticker.clone());
            }
        }
        KeyCode::Char('r') => {
            app.request(ApiRequest::FetchTickers);
        }
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    // Submit is handled outside the borrow of the form
    let mut submit = false;

    {
        let Some(form) = app.model.ui.ticker_form.as_mut() else {
            return;
        };

        if form.submitting {
            // Only allow cancel while the request is in flight
            if key.code == KeyCode::Esc {
                app.model.ui.ticker_form = None;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                app.model.ui.ticker_form = None;
                return;
            }
            KeyCode::Tab | KeyCode::Down => {
                form.focus = form.focus.next();
                return;
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.focus = form.focus.prev();
                return;
            }
            KeyCode::Enter => {
                submit = true;
            }
            KeyCode::Backspace => {
                match form.focus {
                    FormField::Symbol => {
                        form.symbol.pop();
                    }
                    FormField::Name => {
                        form.name.pop();
                    }
                    FormField::AssetType => {}
                }
                return;
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
                if form.focus == FormField::AssetType =>
            {
                form.asset_type = form.asset_type.toggle();
                return;
            }
            KeyCode::Char(c) => {
                match form.focus {
                    // Symbols upper-case as you type, matching the server
                    FormField::Symbol => form.symbol.push(c.to_ascii_uppercase()),
                    FormField::Name => form.name.push(c),
                    FormField::AssetType => {}
                }
                return;
            }
            _ => return,
        }
    }

    if submit {
        submit_form(app);
    }
}

fn submit_form(app: &mut App) {
    let Some(form) = app.model.ui.ticker_form.as_mut() else {
        return;
    };

    let symbol = normalize_symbol(&form.symbol);
    if let Err(message) = validate_form(&symbol, &form.name) {
        app.model.show_toast(format!("Error: {}", message));
        return;
    }

    form.submitting = true;
    let new_ticker = NewTicker {
        ticker: symbol,
        name: form.name.trim().to_string(),
        asset_type: form.asset_type.as_str().to_string(),
    };
    app.request(ApiRequest::AddTicker { new_ticker });
}
