use std::collections::{HashSet, VecDeque};
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use crate::api::{
    Article, HealthStatus, LatestResponse, NewTicker, ProcessReport, ProcessScope,
    SentimentClient, SentimentSummary, TickerConfig,
};

/// Priority level for API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,   // User-initiated actions (mutations, opening a screen)
    Medium, // Visible data loads (summary fan-out)
    Low,    // Background health probe
}

/// Unique identifier for tracking in-flight requests
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum RequestKey {
    Tickers,
    Summary { ticker: String },
    Latest { ticker: String },
    Articles { ticker: String, sentiment: String },
    Article { article_id: i64 },
    Health,
    // Mutations never coalesce
    Write { tag: String },
}

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// Load the monitored ticker list
    FetchTickers,

    /// Load the sentiment summary for one ticker (dashboard fan-out)
    FetchSummary { ticker: String, days: u32 },

    /// Load the latest articles for one ticker
    FetchLatest { ticker: String, limit: u32 },

    /// Load articles for one ticker filtered by sentiment label
    FetchArticles {
        ticker: String,
        sentiment: String,
        limit: u32,
    },

    /// Load one article in full (reading popup)
    FetchArticle { article_id: i64 },

    /// Create a monitored ticker
    AddTicker { new_ticker: NewTicker },

    /// Delete a monitored ticker
    DeleteTicker { ticker: String },

    /// Trigger server-side news processing
    ProcessNews {
        scope: ProcessScope,
        max_articles: u32,
    },

    /// Probe the API health endpoint
    FetchHealth,
}

impl ApiRequest {
    /// Extract priority from request
    fn priority(&self) -> Priority {
        match self {
            ApiRequest::FetchSummary { .. } => Priority::Medium,
            ApiRequest::FetchHealth => Priority::Low,
            // Mutations and screen-opening loads run first
            _ => Priority::High,
        }
    }

    /// Generate a key for in-flight tracking
    fn key(&self) -> RequestKey {
        match self {
            ApiRequest::FetchTickers => RequestKey::Tickers,
            ApiRequest::FetchSummary { ticker, .. } => RequestKey::Summary {
                ticker: ticker.clone(),
            },
            ApiRequest::FetchLatest { ticker, .. } => RequestKey::Latest {
                ticker: ticker.clone(),
            },
            ApiRequest::FetchArticles {
                ticker, sentiment, ..
            } => RequestKey::Articles {
                ticker: ticker.clone(),
                sentiment: sentiment.clone(),
            },
            ApiRequest::FetchArticle { article_id } => RequestKey::Article {
                article_id: *article_id,
            },
            ApiRequest::FetchHealth => RequestKey::Health,
            // Write operations get a unique key each time
            ApiRequest::AddTicker { .. }
            | ApiRequest::DeleteTicker { .. }
            | ApiRequest::ProcessNews { .. } => RequestKey::Write {
                tag: format!("write-{:?}", std::time::Instant::now()),
            },
        }
    }
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    TickersResult {
        tickers: Result<Vec<TickerConfig>, anyhow::Error>,
    },

    SummaryResult {
        ticker: String,
        summary: Result<SentimentSummary, anyhow::Error>,
    },

    LatestResult {
        ticker: String,
        latest: Result<LatestResponse, anyhow::Error>,
    },

    ArticlesResult {
        ticker: String,
        articles: Result<Vec<Article>, anyhow::Error>,
    },

    ArticleResult {
        article_id: i64,
        article: Result<Article, anyhow::Error>,
    },

    AddTickerResult {
        symbol: String,
        result: Result<TickerConfig, anyhow::Error>,
    },

    DeleteTickerResult {
        symbol: String,
        result: Result<(), anyhow::Error>,
    },

    ProcessResult {
        scope: ProcessScope,
        report: Result<ProcessReport, anyhow::Error>,
    },

    HealthResult {
        health: Result<HealthStatus, anyhow::Error>,
    },
}

/// Internal message for tracking completed requests
pub(crate) enum InternalMessage {
    Completed(RequestKey),
}

/// API service worker that processes requests in the background
pub struct ApiService {
    client: SentimentClient,
    request_queue: VecDeque<(ApiRequest, Priority)>,
    in_flight: HashSet<RequestKey>,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
    max_concurrent: usize,
}

impl ApiService {
    pub fn new(
        client: SentimentClient,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<InternalMessage>,
    ) -> Self {
        Self {
            client,
            request_queue: VecDeque::new(),
            in_flight: HashSet::new(),
            response_tx,
            completion_tx,
            max_concurrent: 8, // Limit concurrent API calls
        }
    }

    /// Add a request to the queue, keeping high priority at the front
    fn enqueue(&mut self, request: ApiRequest) {
        let priority = request.priority();

        let insert_pos = self
            .request_queue
            .iter()
            .position(|(_, p)| *p < priority)
            .unwrap_or(self.request_queue.len());

        self.request_queue.insert(insert_pos, (request, priority));
    }

    /// Process the next request from the queue
    async fn process_next(&mut self) {
        if self.in_flight.len() >= self.max_concurrent {
            return; // At capacity, wait for some to complete
        }

        let Some((request, _)) = self.request_queue.pop_front() else {
            return; // Queue is empty
        };

        let key = request.key();
        self.in_flight.insert(key.clone());

        let client = self.client.clone();
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();
        let completion_key = key.clone();

        tokio::spawn(async move {
            let response = Self::execute_request(&client, request).await;
            let _ = response_tx.send(response);
            let _ = completion_tx.send(InternalMessage::Completed(completion_key));
        });
    }

    /// Execute an API request and return the response
    async fn execute_request(client: &SentimentClient, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::FetchTickers => {
                let tickers = client.get_tickers().await;
                ApiResponse::TickersResult { tickers }
            }

            ApiRequest::FetchSummary { ticker, days } => {
                let summary = client.get_sentiment_summary(Some(&ticker), days).await;
                ApiResponse::SummaryResult { ticker, summary }
            }

            ApiRequest::FetchLatest { ticker, limit } => {
                let latest = client.get_ticker_latest(&ticker, limit).await;
                ApiResponse::LatestResult { ticker, latest }
            }

            ApiRequest::FetchArticles {
                ticker,
                sentiment,
                limit,
            } => {
                let articles = client
                    .get_articles(Some(&ticker), Some(&sentiment), limit)
                    .await;
                ApiResponse::ArticlesResult { ticker, articles }
            }

            ApiRequest::FetchArticle { article_id } => {
                let article = client.get_article(article_id).await;
                ApiResponse::ArticleResult {
                    article_id,
                    article,
                }
            }

            ApiRequest::AddTicker { new_ticker } => {
                let symbol = new_ticker.ticker.clone();
                let result = client.add_ticker(&new_ticker).await;
                ApiResponse::AddTickerResult { symbol, result }
            }

            ApiRequest::DeleteTicker { ticker } => {
                let result = client.delete_ticker(&ticker).await;
                ApiResponse::DeleteTickerResult {
                    symbol: ticker,
                    result,
                }
            }

            ApiRequest::ProcessNews {
                scope,
                max_articles,
            } => {
                let report = client.process_news(&scope, max_articles).await;
                ApiResponse::ProcessResult { scope, report }
            }

            ApiRequest::FetchHealth => {
                let health = client.health_check().await;
                ApiResponse::HealthResult { health }
            }
        }
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: SentimentClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut service = ApiService::new(client, response_tx, completion_tx);

        // Ticker for processing queue
        let mut tick = interval(Duration::from_millis(10));

        loop {
            tokio::select! {
                // Receive new requests
                Some(request) = request_rx.recv() => {
                    service.enqueue(request);
                }

                // Handle completion notifications
                Some(InternalMessage::Completed(key)) = completion_rx.recv() => {
                    service.in_flight.remove(&key);
                }

                // Process queue at regular intervals
                _ = tick.tick() => {
                    // Process multiple requests per tick if queue has items
                    for _ in 0..5 {
                        if service.request_queue.is_empty() {
                            break;
                        }
                        service.process_next().await;
                    }
                }
            }
        }
    });

    (request_tx, response_rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priorities() {
        assert_eq!(ApiRequest::FetchTickers.priority(), Priority::High);
        assert_eq!(
            ApiRequest::FetchSummary {
                ticker: "GME".to_string(),
                days: 7
            }
            .priority(),
            Priority::Medium
        );
        assert_eq!(ApiRequest::FetchHealth.priority(), Priority::Low);
    }

    #[test]
    fn test_write_keys_are_unique() {
        let a = ApiRequest::DeleteTicker {
            ticker: "GME".to_string(),
        };
        let b = ApiRequest::DeleteTicker {
            ticker: "GME".to_string(),
        };
        let key_a = a.key();
        // Instant keys tie only when taken within the clock's resolution
        std::thread::sleep(std::time::Duration::from_millis(2));
        assert_ne!(key_a, b.key());
    }

    #[test]
    fn test_read_keys_coalesce() {
        let a = ApiRequest::FetchSummary {
            ticker: "GME".to_string(),
            days: 7,
        };
        let b = ApiRequest::FetchSummary {
            ticker: "GME".to_string(),
            days: 30,
        };
        // Same ticker summary tracks under one key regardless of window
        assert_eq!(a.key(), b.key());
    }
}
