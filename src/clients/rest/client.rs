//! JSON REST calls with path normalization.

use crate::auth::Session;
use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::CatalogConfig;

/// REST client for the dashboard backend.
///
/// One method per verb; write verbs take the JSON body. Paths are relative
/// to the configured base URL, and surrounding `/` characters are ignored.
///
/// # Example
///
/// ```rust,ignore
/// use catalog_ops::RestClient;
///
/// let client = RestClient::new(&session, &config);
///
/// let products = client.get("products").await?;
/// client.put("/products/p-1/", serde_json::json!({"price": 35.5})).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a REST client for `session`.
    #[must_use]
    pub fn new(session: &Session, config: &CatalogConfig) -> Self {
        Self {
            http_client: HttpClient::new(session, config),
        }
    }

    /// The base URL requests are resolved against.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        self.http_client.base_uri()
    }

    /// `GET path`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] for an empty path and
    /// [`RestError::Http`] when the request fails.
    pub async fn get(&self, path: &str) -> Result<HttpResponse, RestError> {
        self.send(HttpMethod::Get, path, None).await
    }

    /// `POST path` with a JSON body.
    ///
    /// # Errors
    ///
    /// As for [`RestClient::get`].
    pub async fn post(&self, path: &str, body: serde_json::Value) -> Result<HttpResponse, RestError> {
        self.send(HttpMethod::Post, path, Some(body)).await
    }

    /// `PUT path` with a JSON body.
    ///
    /// # Errors
    ///
    /// As for [`RestClient::get`].
    pub async fn put(&self, path: &str, body: serde_json::Value) -> Result<HttpResponse, RestError> {
        self.send(HttpMethod::Put, path, Some(body)).await
    }

    /// `PATCH path` with a JSON body.
    ///
    /// # Errors
    ///
    /// As for [`RestClient::get`].
    pub async fn patch(&self, path: &str, body: serde_json::Value) -> Result<HttpResponse, RestError> {
        self.send(HttpMethod::Patch, path, Some(body)).await
    }

    /// `DELETE path`.
    ///
    /// # Errors
    ///
    /// As for [`RestClient::get`].
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, RestError> {
        self.send(HttpMethod::Delete, path, None).await
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, RestError> {
        let path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, path);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        Ok(self.http_client.request(request).await?)
    }
}

/// Strips surrounding `/` characters; a path with nothing left is invalid.
fn normalize_path(path: &str) -> Result<&str, RestError> {
    match path.trim_matches('/') {
        "" => Err(RestError::InvalidPath {
            path: path.to_string(),
        }),
        trimmed => Ok(trimmed),
    }
}
