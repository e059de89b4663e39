//! Transport errors.
//!
//! - [`HttpResponseError`]: the backend answered with a non-2xx status
//! - [`InvalidHttpRequestError`]: a request was rejected before sending
//! - [`HttpError`]: either of those, or a network failure
//!
//! Nothing is retried. The caller decides whether the user should trigger
//! the action again.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_ops::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Response(e)) => println!("backend said {} ({})", e.message, e.code),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::http_request::HttpMethod;

/// A non-2xx answer from the backend.
///
/// Displays as the backend's own message, which inline editors show to the
/// user verbatim.
///
/// # Example
///
/// ```rust
/// use catalog_ops::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 409,
///     message: "SKU already exists".to_string(),
///     error_reference: Some("abc-123".to_string()),
///     body: serde_json::json!({"message": "SKU already exists"}),
/// };
///
/// assert_eq!(error.to_string(), "SKU already exists");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// Status code.
    pub code: u16,
    /// Message extracted from the body.
    pub message: String,
    /// `X-Request-Id` of the failed request.
    pub error_reference: Option<String>,
    /// Parsed body, read again for field-level validation errors.
    pub body: serde_json::Value,
}

/// A request whose body does not fit its method.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// `POST`, `PUT` and `PATCH` need a JSON body.
    #[error("{method} requests must carry a JSON body")]
    MissingBody {
        /// The offending method.
        method: HttpMethod,
    },

    /// `GET` and `DELETE` are sent without a body.
    #[error("{method} requests cannot carry a body")]
    UnexpectedBody {
        /// The offending method.
        method: HttpMethod,
    },
}

/// Any failure of a single request.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The backend rejected the request.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The request was not sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Connection, TLS or body read failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// The status code, when the backend answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(code: u16, message: &str) -> HttpResponseError {
        HttpResponseError {
            code,
            message: message.to_string(),
            error_reference: None,
            body: serde_json::Value::Null,
        }
    }

    #[test]
    fn test_response_error_shows_backend_message() {
        assert_eq!(rejected(404, "Product not found").to_string(), "Product not found");
    }

    #[test]
    fn test_invalid_request_messages() {
        let missing = InvalidHttpRequestError::MissingBody {
            method: HttpMethod::Patch,
        };
        assert_eq!(missing.to_string(), "PATCH requests must carry a JSON body");

        let unexpected = InvalidHttpRequestError::UnexpectedBody {
            method: HttpMethod::Get,
        };
        assert_eq!(unexpected.to_string(), "GET requests cannot carry a body");
    }

    #[test]
    fn test_status_only_for_backend_answers() {
        assert_eq!(HttpError::from(rejected(422, "invalid")).status(), Some(422));

        let unsent = HttpError::from(InvalidHttpRequestError::MissingBody {
            method: HttpMethod::Post,
        });
        assert_eq!(unsent.status(), None);
    }
}
