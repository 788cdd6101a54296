//! Client configuration: where the API lives and how long to wait for it.

use std::time::Duration;

use crate::endpoint::Endpoint;

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://crawlic.ialae.com";

/// Default hard timeout for a single request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    /// `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    /// Config for the given base URL. A trailing `/` is dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    pub fn register_url(&self) -> String {
        format!("{}/api/register", self.base_url)
    }

    /// Swagger UI, served behind the `/api` proxy prefix.
    pub fn docs_url(&self) -> String {
        format!("{}/api/api/docs", self.base_url)
    }
}
