//! Configuration errors.
//!
//! Every config newtype and [`CatalogConfig::builder`](crate::CatalogConfig::builder)
//! reject bad input up front with a [`ConfigError`].
//!
//! ```rust
//! use catalog_ops::{ApiBaseUrl, ConfigError};
//!
//! assert!(matches!(ApiBaseUrl::new(""), Err(ConfigError::EmptyApiBaseUrl)));
//! ```

use thiserror::Error;

/// Rejected configuration input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No backend URL was given.
    #[error("API base URL cannot be empty. Please provide the dashboard backend URL.")]
    EmptyApiBaseUrl,

    /// The backend URL has no `http` or `https` scheme.
    #[error("Invalid API base URL '{url}'. Please provide a URL with scheme (e.g., 'https://ops.example.com/api').")]
    InvalidApiBaseUrl {
        /// As given.
        url: String,
    },

    /// Not a three-letter ISO 4217 code.
    #[error("Invalid currency code '{code}'. Expected a three-letter ISO 4217 code (e.g., 'USD').")]
    InvalidCurrencyCode {
        /// As given.
        code: String,
    },

    /// Pages hold at least one row.
    #[error("Page size must be greater than zero.")]
    ZeroPageSize,

    /// The builder was finished without a required setting.
    #[error("Missing required field: '{field}'. Set it on the builder before calling build().")]
    MissingRequiredField {
        /// Builder setting name.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_bad_input() {
        let url = ConfigError::InvalidApiBaseUrl {
            url: "ops.example.com".to_string(),
        };
        assert!(url.to_string().contains("'ops.example.com'"));

        let code = ConfigError::InvalidCurrencyCode {
            code: "dollars".to_string(),
        };
        assert!(code.to_string().contains("'dollars'"));
    }

    #[test]
    fn test_missing_field_names_the_setting() {
        let error = ConfigError::MissingRequiredField {
            field: "api_base_url",
        };
        assert_eq!(
            error.to_string(),
            "Missing required field: 'api_base_url'. Set it on the builder before calling build()."
        );
    }

    #[test]
    fn test_config_error_is_std_error() {
        fn boxed(error: ConfigError) -> Box<dyn std::error::Error + Send + Sync> {
            Box::new(error)
        }
        assert_eq!(boxed(ConfigError::ZeroPageSize).to_string(), "Page size must be greater than zero.");
    }
}
