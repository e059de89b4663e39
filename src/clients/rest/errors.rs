//! Errors of [`RestClient`](crate::clients::rest::RestClient) calls.

use thiserror::Error;

use crate::clients::HttpError;

/// A failed REST call.
///
/// # Example
///
/// ```rust
/// use catalog_ops::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "/".to_string() };
/// assert_eq!(error.to_string(), "Invalid REST API path: /");
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The path is empty once surrounding `/` characters are removed.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The path as given.
        path: String,
    },

    /// The request failed or the backend rejected it.
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_backend_message_passes_through() {
        let error = RestError::from(HttpError::Response(HttpResponseError {
            code: 500,
            message: "Database unavailable".to_string(),
            error_reference: None,
            body: serde_json::Value::Null,
        }));
        assert_eq!(error.to_string(), "Database unavailable");
    }
}
