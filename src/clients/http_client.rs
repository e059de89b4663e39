//! The async HTTP client.

use std::collections::HashMap;

use crate::auth::Session;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::CatalogConfig;

/// Library version, reported in the `User-Agent` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sends JSON requests to the dashboard backend on behalf of one session.
///
/// Every request carries the session's bearer token, `Accept:
/// application/json` and a `User-Agent` naming this library. A request is
/// sent exactly once with no client-side timeout; once sent it completes or
/// fails on its own, whatever the caller does in the meantime.
///
/// # Example
///
/// ```rust,ignore
/// use catalog_ops::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new(&session, &config);
/// let request = HttpRequest::builder(HttpMethod::Get, "products").build()?;
/// let response = client.request(request).await?;
/// println!("{} products", response.body.as_array().map_or(0, Vec::len));
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    default_headers: HashMap<String, String>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

fn user_agent(prefix: Option<&str>) -> String {
    let agent = format!(
        "Catalog Ops Library v{SDK_VERSION} | Rust {}",
        env!("CARGO_PKG_RUST_VERSION")
    );
    match prefix {
        Some(prefix) => format!("{prefix} | {agent}"),
        None => agent,
    }
}

/// Parses a response body. Empty bodies become `{}`; text that is not JSON
/// is kept under `raw_body` so its message survives.
fn parse_body(text: &str) -> serde_json::Value {
    if text.trim().is_empty() {
        return serde_json::json!({});
    }
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::json!({ "raw_body": text }))
}

fn collect_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
    let mut collected: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers {
        if let Ok(value) = value.to_str() {
            collected
                .entry(name.as_str().to_ascii_lowercase())
                .or_default()
                .push(value.to_string());
        }
    }
    collected
}

impl HttpClient {
    /// Creates a client for `session` against the configured base URL.
    #[must_use]
    pub fn new(session: &Session, config: &CatalogConfig) -> Self {
        let mut default_headers = HashMap::from([
            ("User-Agent".to_string(), user_agent(config.user_agent_prefix())),
            ("Accept".to_string(), "application/json".to_string()),
        ]);
        if let Some(authorization) = session.authorization() {
            default_headers.insert("Authorization".to_string(), authorization);
        }

        Self {
            client: reqwest::Client::new(),
            base_uri: config.api_base_url().as_ref().to_string(),
            default_headers,
        }
    }

    /// The base URL requests are resolved against.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends `request` once.
    ///
    /// # Errors
    ///
    /// - [`HttpError::InvalidRequest`] if the body does not fit the method
    /// - [`HttpError::Network`] if the backend could not be reached
    /// - [`HttpError::Response`] for any non-2xx status, carrying the
    ///   backend's message and body
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}/{}", self.base_uri, request.path);
        let mut builder = self.client.request(request.method.into(), url.as_str());

        let extra = request.headers.iter().map(|(name, value)| (name, value));
        for (name, value) in self.default_headers.iter().chain(extra) {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::debug!(method = %request.method, path = %request.path, "sending request");
        let sent = builder.send().await?;

        let code = sent.status().as_u16();
        let headers = collect_headers(sent.headers());
        let text = sent.text().await?;
        let response = HttpResponse::new(code, headers, parse_body(&text));

        if response.is_ok() {
            return Ok(response);
        }

        let message = response.error_message();
        let error_reference = response.request_id().map(ToString::to_string);
        tracing::warn!(
            code,
            method = %request.method,
            path = %request.path,
            request_id = error_reference.as_deref().unwrap_or_default(),
            "backend rejected request: {message}"
        );

        Err(HttpResponseError {
            code,
            message,
            error_reference,
            body: response.body,
        }
        .into())
    }
}
