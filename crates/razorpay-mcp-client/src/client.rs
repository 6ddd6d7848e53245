//! Razorpay REST client.

use std::fmt;

use reqwest::header::USER_AGENT;
use reqwest::{Method, Url};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Production Razorpay API root.
pub const DEFAULT_BASE_URL: &str = "https://api.razorpay.com/v1";

/// Async client for the Razorpay REST API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct RazorpayClient {
    http: reqwest::Client,
    base_url: String,
    key: String,
    secret: String,
    user_agent: String,
}

impl RazorpayClient {
    /// Create a client authenticating with `key` / `secret`.
    ///
    /// Credentials are not validated here; a bad pair surfaces as an
    /// [`Error::Api`] on the first request.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            key: key.into(),
            secret: secret.into(),
            user_agent: format!("razorpay-mcp-client/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    /// Point the client at a different API root (mock servers, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the `User-Agent` sent with every request.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// API root requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `User-Agent` sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Build the absolute URL for `path` plus query pairs.
    pub fn url(&self, path: &str, query: &[(String, String)]) -> Result<Url> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut url = Url::parse(&raw).map_err(|e| Error::InvalidUrl(format!("{raw}: {e}")))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Send one request and decode the JSON response.
    ///
    /// `body` is sent as JSON. An empty success body decodes to `Value::Null`.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Value> {
        let url = self.url(path, query)?;
        tracing::debug!(%method, path = url.path(), "razorpay request");

        let mut request = self
            .http
            .request(method, url)
            .basic_auth(&self.key, Some(&self.secret))
            .header(USER_AGENT, &self.user_agent);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "razorpay error response");
            return Err(api_error(status.as_u16(), &text));
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

impl fmt::Debug for RazorpayClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RazorpayClient")
            .field("base_url", &self.base_url)
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

// ============================================================================
// Error envelope
// ============================================================================

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    code: Option<String>,
    description: Option<String>,
    field: Option<String>,
}

/// Decode `{"error": {"code", "description", "field"}}`; fall back to the raw body.
fn api_error(status: u16, body: &str) -> Error {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error }) => {
            let mut description = error.description.unwrap_or_default();
            if let Some(field) = error.field.filter(|f| !f.is_empty()) {
                description = format!("{description} (field: {field})");
            }
            Error::Api {
                status,
                code: error.code.unwrap_or_else(|| "UNKNOWN_ERROR".to_string()),
                description,
            }
        }
        Err(_) => Error::Api {
            status,
            code: "UNKNOWN_ERROR".to_string(),
            description: body.trim().to_string(),
        },
    }
}

// ============================================================================
// Tests
// ============================================================================
