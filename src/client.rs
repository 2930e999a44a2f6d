use crate::{
    config::{Config, MAX_BATCH_SIZE},
    error::Error,
    models::{batch::Batch, joke::Joke},
    result::Result,
};
use reqwest::{header::USER_AGENT, Client as ReqwestClient};
use serde::de::DeserializeOwned;

/// Handle used to fetch jokes from the provider.
///
/// Holds no per-call state, so a single `Client` can be shared by reference
/// between tasks.
#[derive(Debug, Clone)]
pub struct Client {
    http: ReqwestClient,
    config: Config,
}

impl Client {
    /// Creates a client for the public provider with the default settings.
    pub fn new() -> Client {
        Self::with_config(Config::default())
    }

    /// Creates a client from the given settings.
    pub fn with_config(config: Config) -> Client {
        let http = ReqwestClient::new();
        Client { http, config }
    }

    /// Returns the settings this client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetches a random joke.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the provider answers with a
    /// non-2xx status, or the body is not a joke.
    pub async fn fetch_random(&self) -> Result<Joke> {
        let url = format!("{}/random_joke", self.config.base_url());
        self.fetch_json(&url).await
    }

    /// Fetches a random joke of the given category.
    ///
    /// The category is placed into the URL as-is. [`Category`] covers the
    /// labels the provider is known to serve.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the provider answers with a
    /// non-2xx status, or the body is not a joke.
    ///
    /// [`Category`]: crate::joke::Category
    pub async fn fetch_by_type(&self, category: impl AsRef<str>) -> Result<Joke> {
        let url = format!(
            "{}/jokes/{}/random",
            self.config.base_url(),
            category.as_ref()
        );
        self.fetch_json(&url).await
    }

    /// Fetches the joke with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the provider answers with a
    /// non-2xx status, or the body is not a joke.
    pub async fn fetch_by_id(&self, id: u32) -> Result<Joke> {
        let url = format!("{}/jokes/{id}", self.config.base_url());
        self.fetch_json(&url).await
    }

    /// Fetches up to `count` random jokes in one request.
    ///
    /// Counts above [`MAX_BATCH_SIZE`] are lowered to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] without making a request if
    /// `count` is zero or negative. Otherwise fails like the single fetches.
    ///
    /// [`MAX_BATCH_SIZE`]: crate::config::MAX_BATCH_SIZE
    pub async fn fetch_batch(&self, count: i64) -> Result<Batch> {
        let count = batch_size(count)?;
        let url = format!("{}/jokes/random/{count}", self.config.base_url());
        let batch: Batch = self.fetch_json(&url).await?;
        log::debug!("decoded {} jokes", batch.len());
        Ok(batch)
    }

    pub(crate) async fn fetch_json<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request = self
            .http
            .get(url)
            .header(USER_AGENT, self.config.user_agent())
            .timeout(self.config.timeout())
            .build()
            .map_err(Error::Request)?;

        log::info!("request for {} dispatched", url);
        let response = self.http.execute(request).await.map_err(Error::Transport)?;
        log::info!("response status: {}", response.status());

        let status = response.status();
        if !status.is_success() {
            log::warn!("{} answered with {}", url, status);
            return Err(Error::UnexpectedStatus(status));
        }

        let body = response.bytes().await.map_err(Error::Transport)?;
        serde_json::from_slice(&body).map_err(Into::into)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

fn batch_size(count: i64) -> Result<u8> {
    if count <= 0 {
        return Err(Error::InvalidArgument(format!(
            "count must be greater than 0, got {count}"
        )));
    }
    let max = i64::from(MAX_BATCH_SIZE);
    if count > max {
        log::debug!("clamping batch of {} down to {}", count, max);
    }
    u8::try_from(count.min(max)).map_err(|e| Error::InvalidArgument(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_size_rejects_non_positive_counts() {
        for count in [0, -1, i64::MIN] {
            let err = batch_size(count).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "{count}: {err}");
        }
    }

    #[test]
    fn batch_size_clamps_to_provider_limit() {
        assert_eq!(batch_size(1).unwrap(), 1);
        assert_eq!(batch_size(10).unwrap(), 10);
        assert_eq!(batch_size(15).unwrap(), MAX_BATCH_SIZE);
        assert_eq!(batch_size(i64::MAX).unwrap(), MAX_BATCH_SIZE);
    }

    #[test]
    fn trailing_slash_does_not_double_up() {
        let client = Client::with_config(Config::default().with_base_url("http://host/"));
        assert_eq!(client.config().base_url(), "http://host");
    }
}
