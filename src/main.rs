use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs, io,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
    time::{Duration, Instant},
};

/// News sentiment terminal dashboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp dir
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, g/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// API base URL (overrides the config file; allows running without one)
    #[arg(long)]
    url: Option<String>,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

mod api;
mod config;
mod handlers;
mod logic;
mod model;
mod services;
mod ui;
mod utils;

use api::{ProcessScope, SentimentClient};
use config::Config;
use model::market::ConnectionState;
use model::Model;
use services::api::{spawn_api_service, ApiRequest, ApiResponse};

pub fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

pub struct App {
    pub model: Model,

    pub summary_days: u32,
    pub article_limit: u32,
    pub process_max_articles: u32,
    pub open_command: Option<String>,

    api_tx: tokio::sync::mpsc::UnboundedSender<ApiRequest>,
    api_rx: tokio::sync::mpsc::UnboundedReceiver<ApiResponse>,

    last_health_probe: Instant,
}

impl App {
    async fn new(config: Config) -> Result<Self> {
        let client = SentimentClient::new(config.base_url.clone());
        let mut model = Model::new(config.vim_mode);

        // Initial ticker load happens inline so the first frame already
        // knows whether the API is reachable
        match client.get_tickers().await {
            Ok(tickers) => {
                if !tickers.is_empty() {
                    model.navigation.dashboard_selection = Some(0);
                }
                model.market.tickers = tickers;
                model.market.tickers_loaded = true;
                model.market.connection_state = ConnectionState::Connected;
            }
            Err(e) => {
                log_debug(&format!("Initial ticker fetch failed: {}", e));
                model.market.connection_state = ConnectionState::Disconnected {
                    error_type: logic::errors::classify_error(&e),
                    message: logic::errors::format_error_message(&e),
                };
            }
        }

        // Spawn API service worker
        let (api_tx, api_rx) = spawn_api_service(client);

        let app = Self {
            model,
            summary_days: config.summary_days,
            article_limit: config.article_limit,
            process_max_articles: config.process_max_articles,
            open_command: config.open_command,
            api_tx,
            api_rx,
            last_health_probe: Instant::now(),
        };

        // Fan out the dashboard's summary requests and probe health
        for config in &app.model.market.tickers {
            app.request(ApiRequest::FetchSummary {
                ticker: config.ticker.clone(),
                days: app.summary_days,
            });
        }
        app.request(ApiRequest::FetchHealth);

        Ok(app)
    }

    /// Send a request to the background API service
    pub fn request(&self, request: ApiRequest) {
        let _ = self.api_tx.send(request);
    }

    /// Reload the open detail screen's articles, honoring the filter
    pub fn reload_detail(&mut self) {
        let Some(symbol) = self.model.navigation.detail_ticker.clone() else {
            return;
        };

        match self.model.ui.sentiment_filter.as_query() {
            None => self.request(ApiRequest::FetchLatest {
                ticker: symbol,
                limit: self.article_limit,
            }),
            Some(sentiment) => self.request(ApiRequest::FetchArticles {
                ticker: symbol,
                sentiment: sentiment.to_string(),
                limit: self.article_limit,
            }),
        }
    }

    /// Kick off a server-side process-news run (one at a time)
    pub fn trigger_process(&mut self, scope: ProcessScope) {
        if self.model.market.processing {
            self.model.show_toast("A news update is already running".to_string());
            return;
        }

        self.model.market.processing = true;
        self.request(ApiRequest::ProcessNews {
            scope,
            max_articles: self.process_max_articles,
        });
    }

    /// Open the article under the cursor (or in the popup) in the browser
    pub fn open_selected_article_url(&mut self) {
        let url = self
            .model
            .market
            .article_detail
            .as_ref()
            .and_then(|a| a.url.clone())
            .or_else(|| self.model.selected_article().and_then(|a| a.url.clone()));

        let Some(url) = url else {
            self.model.show_toast("Error: article has no URL".to_string());
            return;
        };

        let Some(command) = self.open_command.clone() else {
            self.model
                .show_toast("Error: no open_command configured".to_string());
            return;
        };

        match std::process::Command::new(&command).arg(&url).spawn() {
            Ok(_) => self.model.show_toast("Opening article".to_string()),
            Err(e) => {
                log_debug(&format!("Failed to run {}: {}", command, e));
                self.model
                    .show_toast(format!("Error: failed to run {}", command));
            }
        }
    }
}

fn missing_config_message(expected_path: &std::path::Path) -> String {
    format!(
        "No config file found.\n\
         \n\
         Searched:\n\
         1. {} (platform default)\n\
         2. ./config.yaml (fallback)\n\
         \n\
         Create one with at least:\n\
         \n\
         base_url: http://localhost:5000\n\
         \n\
         Use --config <path> for a custom location, or pass --url to run\n\
         without a config file.",
        expected_path.display()
    )
}

fn get_config_path(cli_config: Option<String>) -> Result<PathBuf> {
    // Explicit path must exist
    if let Some(path) = cli_config {
        let path = PathBuf::from(path);
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        return Ok(path);
    }

    let mut expected = PathBuf::from("config.yaml");
    if let Some(mut dir) = dirs::config_dir() {
        dir.push("sentitui");
        dir.push("config.yaml");
        if dir.exists() {
            return Ok(dir);
        }
        expected = dir;
    }

    let fallback = PathBuf::from("config.yaml");
    if fallback.exists() {
        return Ok(fallback);
    }

    anyhow::bail!(missing_config_message(&expected))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    if args.debug {
        log_debug("Debug mode enabled");
    }

    // Load configuration; --url alone is enough to run
    let mut config = match get_config_path(args.config) {
        Ok(config_path) => {
            if args.debug {
                log_debug(&format!("Loading config from: {:?}", config_path));
            }
            let config_str = fs::read_to_string(&config_path)?;
            serde_yaml::from_str::<Config>(&config_str)?
        }
        Err(e) => match &args.url {
            Some(url) => Config::with_base_url(url.clone()),
            None => return Err(e),
        },
    };

    // Override config with CLI flags
    if let Some(url) = args.url {
        config.base_url = url;
    }
    if args.vim {
        config.vim_mode = true;
    }

    // Initialize app
    let mut app = App::new(config).await?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast
        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            handlers::handle_api_response(app, response);
        }

        // Periodic health probe keeps the nav-bar indicator current
        if app.last_health_probe.elapsed() >= Duration::from_secs(30) {
            app.request(ApiRequest::FetchHealth);
            app.last_health_probe = Instant::now();
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key);
            }
        }
    }

    Ok(())
}
