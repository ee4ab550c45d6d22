//! API Response Handler
//!
//! Folds responses from the background API service into the model and
//! schedules follow-up requests (the summary fan-out, reloads after
//! mutations).

use crate::api::ProcessScope;
use crate::log_debug;
use crate::logic::errors::{classify_error, format_error_message};
use crate::model::market::ConnectionState;
use crate::services::api::{ApiRequest, ApiResponse};
use crate::App;

/// Handle a response from the API service
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::TickersResult { tickers } => match tickers {
            Ok(tickers) => {
                app.model.market.tickers = tickers;
                app.model.market.tickers_loaded = true;
                app.model.market.connection_state = ConnectionState::Connected;

                // Drop cached data for tickers that no longer exist
                let known: Vec<String> = app
                    .model
                    .market
                    .tickers
                    .iter()
                    .map(|t| t.ticker.clone())
                    .collect();
                app.model.market.summaries.retain(|k, _| known.contains(k));
                app.model.market.articles.retain(|k, _| known.contains(k));

                let count = app.model.market.tickers.len();
                app.model.navigation.clamp_ticker_selections(count);

                // Fan out one summary request per ticker
                for symbol in known {
                    app.request(ApiRequest::FetchSummary {
                        ticker: symbol,
                        days: app.summary_days,
                    });
                }
            }
            Err(e) => report_connection_error(app, &e, "load tickers"),
        },

        ApiResponse::SummaryResult { ticker, summary } => match summary {
            Ok(summary) => {
                app.model.market.connection_state = ConnectionState::Connected;
                app.model.market.summaries.insert(ticker, summary);
            }
            Err(e) => {
                // Status bar shows the connection error; no toast per ticker
                // to avoid a flood when the whole fan-out fails.
                log_debug(&format!("Summary fetch failed for {}: {}", ticker, e));
                app.model.market.connection_state = ConnectionState::Disconnected {
                    error_type: classify_error(&e),
                    message: format_error_message(&e),
                };
            }
        },

        ApiResponse::LatestResult { ticker, latest } => match latest {
            Ok(latest) => {
                app.model.market.connection_state = ConnectionState::Connected;
                // Only the open detail screen's cursor follows the new list
                let is_open =
                    app.model.navigation.detail_ticker.as_deref() == Some(ticker.as_str());
                let count = latest.articles.len();
                app.model.market.articles.insert(ticker, latest.articles);
                if is_open {
                    app.model.navigation.clamp_article_selection(count);
                }
            }
            Err(e) => report_connection_error(app, &e, "load articles"),
        },

        ApiResponse::ArticlesResult { ticker, articles } => match articles {
            Ok(articles) => {
                app.model.market.connection_state = ConnectionState::Connected;
                let is_open =
                    app.model.navigation.detail_ticker.as_deref() == Some(ticker.as_str());
                let count = articles.len();
                app.model.market.articles.insert(ticker, articles);
                if is_open {
                    app.model.navigation.clamp_article_selection(count);
                }
            }
            Err(e) => report_connection_error(app, &e, "load articles"),
        },

        ApiResponse::ArticleResult {
            article_id,
            article,
        } => match article {
            Ok(article) => {
                app.model.market.article_detail = Some(article);
            }
            Err(e) => {
                // Popup falls back to the list data it already has
                log_debug(&format!("Article {} fetch failed: {}", article_id, e));
                app.model
                    .show_toast(format!("Error: {}", format_error_message(&e)));
            }
        },

        ApiResponse::AddTickerResult { symbol, result } => match result {
            Ok(_config) => {
                app.model.ui.ticker_form = None;
                app.model.show_toast(format!("Added {}", symbol));
                app.request(ApiRequest::FetchTickers);
            }
            Err(e) => {
                // Keep the form open so the input can be corrected
                if let Some(form) = app.model.ui.ticker_form.as_mut() {
                    form.submitting = false;
                }
                app.model
                    .show_toast(format!("Error: {}", format_error_message(&e)));
            }
        },

        ApiResponse::DeleteTickerResult { symbol, result } => match result {
            Ok(()) => {
                app.model.market.forget_ticker(&symbol);
                let count = app.model.market.tickers.len();
                app.model.navigation.clamp_ticker_selections(count);
                app.model.show_toast(format!("Deleted {}", symbol));
                // Authoritative refresh
                app.request(ApiRequest::FetchTickers);
            }
            Err(e) => {
                app.model
                    .show_toast(format!("Error: {}", format_error_message(&e)));
            }
        },

        ApiResponse::ProcessResult { scope, report } => {
            app.model.market.processing = false;
            match report {
                Ok(report) => {
                    let processed = report.processed_tickers.len();
                    app.model.show_toast(format!(
                        "Processed news for {} ticker{}",
                        processed,
                        if processed == 1 { "" } else { "s" }
                    ));

                    // Fresh counts for the dashboard
                    app.request(ApiRequest::FetchTickers);

                    // And fresh articles if a detail screen is watching one
                    // of the processed tickers
                    let reload_detail = match (&scope, &app.model.navigation.detail_ticker) {
                        (ProcessScope::All, Some(_)) => true,
                        (ProcessScope::Tickers(list), Some(open)) => list.contains(open),
                        _ => false,
                    };
                    if reload_detail {
                        app.reload_detail();
                    }
                }
                Err(e) => {
                    app.model
                        .show_toast(format!("Error: {}", format_error_message(&e)));
                }
            }
        }

        ApiResponse::HealthResult { health } => match health {
            Ok(health) => {
                app.model.market.health = Some(health);
                app.model.market.connection_state = ConnectionState::Connected;
            }
            Err(e) => {
                app.model.market.health = None;
                app.model.market.connection_state = ConnectionState::Disconnected {
                    error_type: classify_error(&e),
                    message: format_error_message(&e),
                };
            }
        },
    }
}

/// Record a failed call: classify it for the status bar and raise a toast.
fn report_connection_error(app: &mut App, error: &anyhow::Error, action: &str) {
    log_debug(&format!("Failed to {}: {}", action, error));
    let message = format_error_message(error);
    app.model.market.connection_state = ConnectionState::Disconnected {
        error_type: classify_error(error),
        message: message.clone(),
    };
    app.model
        .show_toast(format!("Error: failed to {}: {}", action, message));
}
