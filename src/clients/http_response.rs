//! A backend answer, already read and parsed.

use std::collections::HashMap;

/// Status, headers and JSON body of one response.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// Status code.
    pub code: u16,
    /// Header values by lower-case name.
    pub headers: HashMap<String, Vec<String>>,
    /// JSON body; `{}` when the backend sent nothing.
    pub body: serde_json::Value,
}

impl HttpResponse {
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// `true` for any 2xx status.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.code, 200..=299)
    }

    /// The backend's `X-Request-Id`, quoted in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// First value of header `name`, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        let values = self.headers.get(&name.to_ascii_lowercase())?;
        values.first().map(String::as_str)
    }

    /// The message to show for a failed request.
    ///
    /// Tried in order: `message`, `error`, the `errors` list joined with
    /// `, `, then a non-JSON body as sent. Otherwise names the status code.
    #[must_use]
    pub fn error_message(&self) -> String {
        let text = |key: &str| {
            self.body
                .get(key)
                .and_then(serde_json::Value::as_str)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
        };

        let listed = || {
            let items = self.body.get("errors")?.as_array()?;
            let joined = items
                .iter()
                .filter_map(serde_json::Value::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            (!joined.is_empty()).then_some(joined)
        };

        text("message")
            .or_else(|| text("error"))
            .or_else(listed)
            .or_else(|| text("raw_body"))
            .unwrap_or_else(|| format!("Request failed with status {}", self.code))
    }
}
