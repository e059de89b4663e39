//! JSON requests to the dashboard backend.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// Methods used by the product and preferences routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Reads.
    Get,
    /// Batch actions such as bulk delete and import.
    Post,
    /// Product updates and whole-document preference writes.
    Put,
    /// Single-section preference writes.
    Patch,
    /// Preference reset.
    Delete,
}

impl HttpMethod {
    /// The method name as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Write methods carry a JSON body; `GET` and `DELETE` never do.
    #[must_use]
    pub const fn requires_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A request relative to the configured API base URL.
///
/// Bodies are always JSON. Build requests with [`HttpRequest::builder`],
/// which checks that write methods carry a body and reads do not.
///
/// # Example
///
/// ```rust
/// use catalog_ops::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let list = HttpRequest::builder(HttpMethod::Get, "products").build().unwrap();
/// assert!(list.body.is_none());
///
/// let edit = HttpRequest::builder(HttpMethod::Put, "products/p-1")
///     .json(json!({"price": 35.5}))
///     .build()
///     .unwrap();
/// assert_eq!(edit.body, Some(json!({"price": 35.5})));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The method.
    pub method: HttpMethod,
    /// Path below the base URL, without a leading `/`.
    pub path: String,
    /// JSON body.
    pub body: Option<serde_json::Value>,
    /// Query string pairs, in order.
    pub query: Vec<(String, String)>,
    /// Headers added on top of the client defaults.
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// Starts a request.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder {
            request: Self {
                method,
                path: path.into(),
                body: None,
                query: Vec::new(),
                headers: Vec::new(),
            },
        }
    }

    /// Checks the body against the method.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] for a write without a
    /// body and [`InvalidHttpRequestError::UnexpectedBody`] for a `GET` or
    /// `DELETE` with one.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match (self.method.requires_body(), self.body.is_some()) {
            (true, false) => Err(InvalidHttpRequestError::MissingBody {
                method: self.method,
            }),
            (false, true) => Err(InvalidHttpRequestError::UnexpectedBody {
                method: self.method,
            }),
            _ => Ok(()),
        }
    }
}

/// Builder returned by [`HttpRequest::builder`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    request: HttpRequest,
}

impl HttpRequestBuilder {
    /// Sets the JSON body.
    #[must_use]
    pub fn json(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.request.body = Some(body.into());
        self
    }

    /// Appends a query string pair.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.query.push((key.into(), value.into()));
        self
    }

    /// Adds a header, overriding a client default of the same name.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.headers.push((name.into(), value.into()));
        self
    }

    /// Finishes the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] when the body does not match the
    /// method.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        self.request.verify()?;
        Ok(self.request)
    }
}
