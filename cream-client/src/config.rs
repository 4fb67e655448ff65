//! Client configuration

use std::time::Duration;

/// Default API base address (the API's development server)
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// How long a notification stays visible
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_millis(4200);

/// Client configuration for connecting to the ordering API
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CREAM_API_BASE | http://127.0.0.1:8000 | API base address |
/// | CREAM_REQUEST_TIMEOUT_SECS | unset | Per-request timeout; unset means none |
/// | CREAM_NOTIFICATION_TTL_MS | 4200 | Notification lifetime |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8000")
    pub base_url: String,

    /// Request timeout in seconds
    ///
    /// `None` applies no timeout: a request that never answers stays in
    /// flight and its resource keeps loading.
    pub timeout: Option<u64>,

    /// Lifetime of a notification before it expires on its own
    pub notification_ttl: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
        }
    }

    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let mut config =
            Self::new(std::env::var("CREAM_API_BASE").unwrap_or_else(|_| DEFAULT_BASE_URL.into()));
        config.timeout = std::env::var("CREAM_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok());
        if let Some(ms) = std::env::var("CREAM_NOTIFICATION_TTL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.notification_ttl = Duration::from_millis(ms);
        }
        config
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Set the notification lifetime
    pub fn with_notification_ttl(mut self, ttl: Duration) -> Self {
        self.notification_ttl = ttl;
        self
    }

    /// Create a network HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
