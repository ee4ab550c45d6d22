use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::ListState,
    Frame,
};

use super::{
    articles, chart, dashboard, dialogs, layout, legend, nav_bar, settings, status_bar, toast,
};
use crate::logic::sentiment::{self, extract_counts, SentimentCounts};
use crate::model::navigation::Screen;
use crate::App;

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let layout_info = layout::calculate_layout(size);

    nav_bar::render_nav_bar(
        f,
        layout_info.nav_area,
        app.model.navigation.screen,
        app.model.navigation.detail_ticker.as_deref(),
        app.model.market.health.as_ref(),
    );

    match app.model.navigation.screen {
        Screen::Dashboard => {
            // Cards on top, the grouped chart along the bottom
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(7), Constraint::Length(12)])
                .split(layout_info.body_area);

            dashboard::render_ticker_grid(
                f,
                chunks[0],
                &app.model.market.tickers,
                &app.model.market.summaries,
                app.model.navigation.dashboard_selection,
            );

            let series = sentiment::build_chart_series(
                &app.model.market.tickers,
                &app.model.market.summaries,
            );
            chart::render_sentiment_chart(f, chunks[1], &series, app.summary_days);
        }

        Screen::TickerDetail => {
            let symbol = app
                .model
                .navigation
                .detail_ticker
                .clone()
                .unwrap_or_default();

            let mut temp_state = ListState::default();
            temp_state.select(app.model.navigation.article_selection);
            articles::render_ticker_detail(
                f,
                layout_info.body_area,
                &symbol,
                app.model.detail_articles(),
                &mut temp_state,
                app.model.ui.sentiment_filter,
            );
            app.model.navigation.article_selection = temp_state.selected();
        }

        Screen::Settings => {
            let mut temp_state = ListState::default();
            temp_state.select(app.model.navigation.settings_selection);
            settings::render_settings(
                f,
                layout_info.body_area,
                &app.model.market.tickers,
                &mut temp_state,
            );
            app.model.navigation.settings_selection = temp_state.selected();
        }
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        app.model.navigation.screen,
        app.model.ui.vim_mode,
        app.model.market.processing,
        app.open_command.is_some(),
    );

    let dashboard_selected: Option<(&str, SentimentCounts)> =
        app.model.selected_dashboard_ticker().map(|config| {
            let counts = app
                .model
                .market
                .summaries
                .get(&config.ticker)
                .map(extract_counts)
                .unwrap_or_default();
            (config.ticker.as_str(), counts)
        });

    let detail = app
        .model
        .navigation
        .detail_ticker
        .as_deref()
        .map(|symbol| {
            (
                symbol,
                app.model.detail_articles().len(),
                app.model.ui.sentiment_filter,
            )
        });

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        app.model.navigation.screen,
        &app.model.market.connection_state,
        app.model.market.processing,
        app.model.market.tickers.len(),
        dashboard_selected,
        detail,
    );

    // Modal dialogs render above everything else
    if let Some(symbol) = &app.model.ui.confirm_delete {
        dialogs::render_delete_confirmation(f, symbol);
    }
    if let Some(form) = &app.model.ui.ticker_form {
        dialogs::render_ticker_form(f, form);
    }
    if app.model.ui.article_popup {
        dialogs::render_article_popup(
            f,
            app.model.market.article_detail.as_ref(),
            app.model.selected_article(),
        );
    }

    // Toast on top of everything
    if let Some((message, _)) = &app.model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
