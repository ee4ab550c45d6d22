use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub base_url: String,
    #[serde(default = "default_summary_days")]
    pub summary_days: u32,
    #[serde(default = "default_article_limit")]
    pub article_limit: u32,
    #[serde(default = "default_process_max_articles")]
    pub process_max_articles: u32,
    #[serde(default)]
    pub vim_mode: bool,
    /// Command used to open article URLs (e.g. "xdg-open", "open")
    #[serde(default)]
    pub open_command: Option<String>,
}

fn default_summary_days() -> u32 {
    7
}

fn default_article_limit() -> u32 {
    20
}

fn default_process_max_articles() -> u32 {
    10
}

impl Config {
    /// Config for running straight from `--url` with no config file.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            summary_days: default_summary_days(),
            article_limit: default_article_limit(),
            process_max_articles: default_process_max_articles(),
            vim_mode: false,
            open_command: None,
        }
    }
}
