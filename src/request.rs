//! Outbound requests and the transport seam.
//!
//! Requests are plain data: URL, optional bearer key, and an already-encoded
//! JSON body. A [`Transport`] performs the POST and hands back the raw body
//! text; decoding happens here so every transport fails the same way on a
//! non-JSON reply.

use serde_json::{Value, json};

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::RequestError;

/// A JSON POST ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub url: String,
    /// Sent as `Authorization: Bearer <key>` when present.
    pub bearer: Option<String>,
    pub body: String,
}

impl ApiRequest {
    /// Authenticated scrape request for `endpoint` against `link`.
    pub fn scrape(config: &ClientConfig, endpoint: Endpoint, api_key: &str, link: &str) -> Self {
        Self {
            url: config.endpoint_url(endpoint),
            bearer: Some(api_key.to_string()),
            body: json!({ "link": link }).to_string(),
        }
    }

    /// Unauthenticated registration request.
    pub fn register(config: &ClientConfig, name: &str, email: &str) -> Self {
        Self {
            url: config.register_url(),
            bearer: None,
            body: json!({ "name": name, "email": email }).to_string(),
        }
    }

    /// Header pairs to attach, in order.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Content-Type", "application/json".to_string())];
        if let Some(key) = &self.bearer {
            headers.push(("Authorization", format!("Bearer {}", key)));
        }
        headers
    }
}

/// Performs one HTTP POST and returns the response body, whatever the status.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post(&self, request: &ApiRequest) -> Result<String, RequestError>;
}

/// Send `request` and decode the reply as JSON.
pub async fn send<T: Transport>(transport: &T, request: &ApiRequest) -> Result<Value, RequestError> {
    log::debug!("POST {}", request.url);
    let body = transport.post(request).await?;
    serde_json::from_str(&body).map_err(RequestError::Decode)
}
