use std::sync::LazyLock;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::RemoteFetchError;
use crate::parse_from_env;

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

const ENV_BASE_URL: &str = "REMOTE_VALUES_URL";
const ENV_TIMEOUT_MS: &str = "REMOTE_VALUES_TIMEOUT_MS";

/// An HTTP endpoint serving a sequence of values as a JSON array.
///
/// One unauthenticated GET of `base_url` per fetch; no query parameters, no
/// pagination. The request is bounded by `timeout_ms` (default
/// [`DEFAULT_TIMEOUT_MS`]) and expiry is reported like any other transport
/// failure.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteSource {
    pub base_url: String,
    pub timeout_ms: Option<u64>,
}

impl RemoteSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: None,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Create a `RemoteSource` with values from environment variables
    ///
    /// `REMOTE_VALUES_URL` and `REMOTE_VALUES_TIMEOUT_MS` when set, the
    /// defaults otherwise.
    pub fn from_env() -> Self {
        let base_url =
            dotenvy::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let timeout_ms = dotenvy::var(ENV_TIMEOUT_MS)
            .is_ok()
            .then(|| parse_from_env::<u64>(ENV_TIMEOUT_MS));

        Self {
            base_url,
            timeout_ms,
        }
    }

    pub fn url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS))
    }

    /// Fetch the source's sequence of values.
    ///
    /// Expects a `200` response whose body is a JSON array of `T`. Every
    /// failure mode collapses into [`RemoteFetchError`]; the body of a
    /// failed-status response is logged and discarded.
    pub async fn fetch_values<T>(&self) -> Result<Vec<T>, RemoteFetchError>
    where
        T: DeserializeOwned,
    {
        let url = self.url();

        let response = CLIENT
            .get(url)
            .timeout(self.timeout())
            .send()
            .await
            .map_err(|e| RemoteFetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            log::error!(
                "Fetch from {url} failed with status: {status}\n==== Response: ====\n {text}"
            );
            return Err(RemoteFetchError::Status(status));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| RemoteFetchError::Request(e.to_string()))?;

        serde_json::from_str(&response_text).map_err(|e| RemoteFetchError::Decode(e.to_string()))
    }
}

impl Default for RemoteSource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
