//! API gateway: credential attachment and unified response interception.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use scalptrack_core::config::ClientConfig;
use scalptrack_core::error::{Result, ScalptrackError};
use scalptrack_infrastructure::TokenStorage;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// All endpoints live under this prefix on the server.
const API_PREFIX: &str = "/api/v1";

/// HTTP gateway to the scalptrack server.
///
/// Authentication rides on two channels at once: the ambient session cookie
/// (reqwest's cookie store) and, as a fallback for environments that block
/// the cookie channel, a bearer token read from [`TokenStorage`] on every
/// request. When both are present the bearer header wins on servers that
/// check it first.
///
/// Every response passes through one interception point: a 401 clears the
/// stored bearer credential before the error propagates. That is transport
/// cleanup only; resetting the session store is the calling view's call.
pub struct ApiGateway {
    client: Client,
    base_url: String,
    tokens: Arc<TokenStorage>,
}

impl ApiGateway {
    /// Creates a gateway for the configured server.
    pub fn new(config: &ClientConfig, tokens: Arc<TokenStorage>) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ScalptrackError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    /// Starts a request to `path` (relative to the `/api/v1` prefix) with
    /// credentials attached.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.auth_request(self.client.request(method, self.url(path)))
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    /// Attaches the stored bearer token, if one can be read.
    ///
    /// Storage failures degrade silently to "no bearer header": the cookie
    /// channel still carries the session, and a broken credential file must
    /// never abort the request itself.
    fn auth_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.load() {
            Ok(Some(token)) => request.bearer_auth(token),
            Ok(None) => request,
            Err(e) => {
                tracing::debug!("[Gateway] Credential storage unavailable: {}", e);
                request
            }
        }
    }

    /// Sends a request and applies the unified response handling.
    ///
    /// - Timeouts and connection failures surface as `Transport`.
    /// - 401 clears the stored bearer credential (idempotently) and
    ///   surfaces as `Unauthorized`.
    /// - Other 4xx with a message body surface as `Validation` with that
    ///   message; everything else non-2xx as `Api`.
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(ScalptrackError::from)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            if let Err(e) = self.tokens.clear() {
                tracing::warn!("[Gateway] Failed to clear bearer credential: {}", e);
            }
            return Err(ScalptrackError::Unauthorized);
        }

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        match extract_error_message(&body) {
            Some(message) if status.is_client_error() => Err(ScalptrackError::validation(message)),
            Some(message) => Err(ScalptrackError::api(status.as_u16(), message)),
            None => Err(ScalptrackError::api(status.as_u16(), String::new())),
        }
    }

    /// Sends a request and deserializes the JSON body.
    pub async fn execute_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.execute(request).await?;
        response.json().await.map_err(|e| ScalptrackError::Serialization {
            format: "JSON".to_string(),
            message: e.to_string(),
        })
    }
}

/// Standard JSON envelope the server wraps most responses in.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// Pulls the user-facing message out of a JSON error body, trying the
/// `message` field first and then `error`.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(|m| m.as_str()))
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}
