use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// `None` when the feed is disabled with an empty `COMMSBOM_PRICING_URL`.
    pub pricing_url: Option<String>,
    pub form_endpoint: String,
    pub store_dir: PathBuf,
    pub store_quota_bytes: usize,
    pub http_timeout_secs: u64,
    pub user_agent: String,
    pub pricing_max_retries: u32,
    pub pricing_retry_backoff_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The form endpoint path identifies the relay account.
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("pricing_url", &self.pricing_url)
            .field("form_endpoint", &"[redacted]")
            .field("store_dir", &self.store_dir)
            .field("store_quota_bytes", &self.store_quota_bytes)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("pricing_max_retries", &self.pricing_max_retries)
            .field("pricing_retry_backoff_ms", &self.pricing_retry_backoff_ms)
            .finish()
    }
}
