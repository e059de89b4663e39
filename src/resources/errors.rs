//! Errors from the product and preferences endpoints.
//!
//! [`ResourceError::from_rest_error`] turns a failed call into something the
//! caller can act on: a 404 becomes [`ResourceError::NotFound`], a 422 becomes
//! [`ResourceError::ValidationFailed`] with per-field messages, and anything
//! else stays a transport error carrying the backend's message.
//!
//! ```rust,ignore
//! match api.update("p-1", &update).await {
//!     Ok(outcome) => catalog.apply_outcome("p-1", &change, outcome),
//!     Err(ResourceError::NotFound { id, .. }) => catalog.remove(&[id]),
//!     Err(e) => banner.show(e.user_message()),
//! }
//! ```

use std::collections::HashMap;

use crate::clients::{HttpError, RestError};
use thiserror::Error;

/// A failed resource call.
///
/// ```rust
/// use catalog_ops::resources::ResourceError;
///
/// let gone = ResourceError::NotFound {
///     resource: "Product",
///     id: "p-123".to_string(),
/// };
/// assert_eq!(gone.to_string(), "Product with id p-123 not found");
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// 404 for a product or integration.
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// `"Product"`, `"Integration"`, ...
        resource: &'static str,
        /// Id from the request path.
        id: String,
    },

    /// 422: the backend refused the values.
    #[error("Validation failed: {}", join_messages(.errors))]
    ValidationFailed {
        /// Messages by field; `base` holds messages not tied to a field.
        errors: HashMap<String, Vec<String>>,
        /// `X-Request-Id` of the rejected request.
        request_id: Option<String>,
    },

    /// A 2xx body that could not be read as the expected type.
    #[error("Unexpected {resource} response: {source}")]
    Deserialize {
        /// What was being read.
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Any other failed request.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The request could not be built.
    #[error(transparent)]
    Rest(RestError),
}

impl From<RestError> for ResourceError {
    fn from(error: RestError) -> Self {
        match error {
            RestError::Http(http) => Self::Http(http),
            other => Self::Rest(other),
        }
    }
}

impl ResourceError {
    /// Classifies a failed call to the `resource` identified by `id`.
    #[must_use]
    pub fn from_rest_error(error: RestError, resource: &'static str, id: Option<&str>) -> Self {
        match error {
            RestError::Http(HttpError::Response(response)) => match response.code {
                404 => Self::NotFound {
                    resource,
                    id: id.unwrap_or("unknown").to_string(),
                },
                422 => {
                    let mut errors = parse_validation_errors(&response.body);
                    if errors.is_empty() {
                        errors.insert("base".to_string(), vec![response.message]);
                    }
                    Self::ValidationFailed {
                        errors,
                        request_id: response.error_reference,
                    }
                }
                _ => Self::Http(HttpError::Response(response)),
            },
            other => other.into(),
        }
    }

    /// Status code, when the backend answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::ValidationFailed { .. } => Some(422),
            Self::Http(e) | Self::Rest(RestError::Http(e)) => e.status(),
            _ => None,
        }
    }

    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::ValidationFailed { request_id, .. } => request_id.as_deref(),
            Self::Http(HttpError::Response(e)) => e.error_reference.as_deref(),
            _ => None,
        }
    }

    /// The message to show the user.
    ///
    /// For backend rejections this is the backend's own message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Http(HttpError::Response(e)) => e.message.clone(),
            Self::ValidationFailed { errors, .. } => join_messages(errors),
            other => other.to_string(),
        }
    }
}

fn join_messages(errors: &HashMap<String, Vec<String>>) -> String {
    let mut fields: Vec<&String> = errors.keys().collect();
    fields.sort();
    fields
        .into_iter()
        .flat_map(|field| {
            errors[field].iter().map(move |message| {
                if field == "base" {
                    message.clone()
                } else {
                    format!("{field} {message}")
                }
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn strings(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::String(s) => vec![s.clone()],
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(serde_json::Value::as_str)
            .map(ToString::to_string)
            .collect(),
        other => vec![other.to_string()],
    }
}

/// Reads field messages out of a 422 body. Understands `errors` as an
/// object of fields, a list or a single string, and falls back to `message`.
fn parse_validation_errors(body: &serde_json::Value) -> HashMap<String, Vec<String>> {
    let base = |messages: Vec<String>| {
        if messages.is_empty() {
            HashMap::new()
        } else {
            HashMap::from([("base".to_string(), messages)])
        }
    };

    match body.get("errors") {
        Some(serde_json::Value::Object(fields)) => fields
            .iter()
            .map(|(field, messages)| (field.clone(), strings(messages)))
            .collect(),
        Some(listed @ (serde_json::Value::Array(_) | serde_json::Value::String(_))) => {
            base(strings(listed))
        }
        _ => base(
            body.get("message")
                .and_then(serde_json::Value::as_str)
                .map(|m| vec![m.to_string()])
                .unwrap_or_default(),
        ),
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
