use std::time::Duration;

/// Base URL of the Official Joke API.
pub const DEFAULT_BASE_URL: &str = "https://official-joke-api.appspot.com";

/// Time allowed for a single request, from dispatch to the last body byte.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = "JokegenClient/1.0";

/// Upper bound the provider places on a single batch request.
pub const MAX_BATCH_SIZE: u8 = 10;

/// Settings a [`Client`] is built from.
///
/// The defaults point at the public provider; overriding the base URL is
/// mostly useful for talking to a mock server.
///
/// ```rust
/// use std::time::Duration;
/// use jokegen::Config;
///
/// let config = Config::default()
///     .with_base_url("http://localhost:8080/")
///     .with_timeout(Duration::from_secs(2));
///
/// assert_eq!(config.base_url(), "http://localhost:8080");
/// ```
///
/// [`Client`]: crate::Client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Config {
    /// Replaces the base URL. A trailing `/` is dropped.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Replaces the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replaces the `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the base URL every endpoint is joined onto.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the `User-Agent` header value.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}
