use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// A ticker the server is monitoring for news.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TickerConfig {
    #[serde(default)]
    pub id: Option<i64>,
    pub ticker: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_asset_type")]
    pub asset_type: String, // "stock" or "crypto"
    #[serde(default = "default_active")]
    pub is_active: i64,
}

fn default_asset_type() -> String {
    "stock".to_string()
}

fn default_active() -> i64 {
    1
}

/// Payload for creating a new monitored ticker.
#[derive(Debug, Clone, Serialize)]
pub struct NewTicker {
    pub ticker: String,
    pub name: String,
    pub asset_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub ticker: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub sentiment_label: Option<String>,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SentimentBucket {
    pub label: String,
    pub count: u64,
    #[serde(default)]
    pub avg_score: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SentimentSummary {
    pub ticker: String,
    #[serde(default)]
    pub period_days: i64,
    #[serde(default)]
    pub sentiments: Vec<SentimentBucket>,
}

/// Response from /ticker/{symbol}/latest.
///
/// When no articles exist the server sends {"message": ..., "articles": []}
/// without the ticker or count fields, so everything is defaulted.
#[derive(Debug, Clone, Deserialize)]
pub struct LatestResponse {
    #[serde(default)]
    pub ticker: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessReport {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub processed_tickers: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: String,
}

/// Which tickers a process-news run should cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessScope {
    All,
    Tickers(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone)]
pub struct SentimentClient {
    base_url: String,
    client: Client,
}

impl SentimentClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turn a non-2xx response into an error, extracting the server's
    /// {"error": "..."} body when it sends one.
    async fn check_error(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        if let Ok(body) = serde_json::from_str::<ErrorBody>(&text) {
            anyhow::bail!("API error ({}): {}", status, body.error);
        }
        anyhow::bail!("API error ({}): {}", status, text);
    }

    pub async fn get_tickers(&self) -> Result<Vec<TickerConfig>> {
        let url = format!("{}/api/tickers", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch tickers")?;

        let response = Self::check_error(response).await?;
        response.json().await.context("Failed to parse tickers")
    }

    pub async fn add_ticker(&self, new_ticker: &NewTicker) -> Result<TickerConfig> {
        let url = format!("{}/api/tickers", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(new_ticker)
            .send()
            .await
            .context("Failed to add ticker")?;

        let response = Self::check_error(response).await?;
        response
            .json()
            .await
            .context("Failed to parse added ticker")
    }

    pub async fn delete_ticker(&self, symbol: &str) -> Result<()> {
        let url = format!(
            "{}/api/tickers/{}",
            self.base_url,
            urlencoding::encode(symbol)
        );
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .context("Failed to delete ticker")?;

        Self::check_error(response).await?;
        Ok(())
    }

    pub async fn get_articles(
        &self,
        ticker: Option<&str>,
        sentiment: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Article>> {
        let mut url = format!("{}/api/articles?limit={}", self.base_url, limit);

        if let Some(ticker) = ticker {
            url.push_str(&format!("&ticker={}", urlencoding::encode(ticker)));
        }
        if let Some(sentiment) = sentiment {
            url.push_str(&format!("&sentiment={}", urlencoding::encode(sentiment)));
        }

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch articles")?;

        let response = Self::check_error(response).await?;
        response.json().await.context("Failed to parse articles")
    }

    pub async fn get_article(&self, article_id: i64) -> Result<Article> {
        let url = format!("{}/api/articles/{}", self.base_url, article_id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch article")?;

        let response = Self::check_error(response).await?;
        response.json().await.context("Failed to parse article")
    }

    pub async fn get_ticker_latest(&self, symbol: &str, limit: u32) -> Result<LatestResponse> {
        let url = format!(
            "{}/api/ticker/{}/latest?limit={}",
            self.base_url,
            urlencoding::encode(symbol),
            limit
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch latest articles")?;

        let response = Self::check_error(response).await?;
        response
            .json()
            .await
            .context("Failed to parse latest articles")
    }

    pub async fn get_sentiment_summary(
        &self,
        ticker: Option<&str>,
        days: u32,
    ) -> Result<SentimentSummary> {
        let mut url = format!("{}/api/sentiment/summary?days={}", self.base_url, days);

        if let Some(ticker) = ticker {
            url.push_str(&format!("&ticker={}", urlencoding::encode(ticker)));
        }

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch sentiment summary")?;

        let response = Self::check_error(response).await?;
        response
            .json()
            .await
            .context("Failed to parse sentiment summary")
    }

    /// Trigger server-side news processing for the given scope.
    pub async fn process_news(
        &self,
        scope: &ProcessScope,
        max_articles: u32,
    ) -> Result<ProcessReport> {
        let url = format!("{}/api/process", self.base_url);

        let payload = match scope {
            ProcessScope::All => serde_json::json!({
                "tickers": "all",
                "max_articles": max_articles,
            }),
            ProcessScope::Tickers(tickers) => serde_json::json!({
                "tickers": tickers,
                "max_articles": max_articles,
            }),
        };

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .context("Failed to trigger news processing")?;

        let response = Self::check_error(response).await?;
        response
            .json()
            .await
            .context("Failed to parse process report")
    }

    pub async fn health_check(&self) -> Result<HealthStatus> {
        let url = format!("{}/api/health", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch health status")?;

        let response = Self::check_error(response).await?;
        response
            .json()
            .await
            .context("Failed to parse health status")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = SentimentClient::new("http://localhost:5000/".to_string());
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_latest_response_tolerates_empty_shape() {
        // The server omits ticker/count entirely when there are no articles
        let json = r#"{"message": "No articles found", "articles": []}"#;
        let parsed: LatestResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.ticker, "");
        assert_eq!(parsed.count, 0);
        assert!(parsed.articles.is_empty());
        assert_eq!(parsed.message.as_deref(), Some("No articles found"));
    }

    #[test]
    fn test_article_tolerates_missing_fields() {
        let json = r#"{"id": 3, "ticker": "GME", "title": "Short squeeze"}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.id, Some(3));
        assert_eq!(article.title.as_deref(), Some("Short squeeze"));
        assert!(article.sentiment_label.is_none());
        assert!(article.sentiment_score.is_none());
    }

    #[test]
    fn test_ticker_config_defaults() {
        let json = r#"{"ticker": "BTC-USD"}"#;
        let config: TickerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.asset_type, "stock");
        assert_eq!(config.is_active, 1);
        assert!(config.id.is_none());
    }

    #[test]
    fn test_summary_parses_buckets() {
        let json = r#"{
            "ticker": "TSLA",
            "period_days": 7,
            "sentiments": [
                {"label": "POSITIVE", "count": 6, "avg_score": 0.91},
                {"label": "NEGATIVE", "count": 2, "avg_score": 0.84}
            ]
        }"#;
        let summary: SentimentSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.ticker, "TSLA");
        assert_eq!(summary.sentiments.len(), 2);
        assert_eq!(summary.sentiments[0].count, 6);
    }
}
