//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::NonZeroUsize;

/// A validated base URL for the dashboard backend.
///
/// The URL must use the `http` or `https` scheme. Trailing slashes are
/// trimmed so request paths can be joined with a single `/`.
///
/// # Example
///
/// ```rust
/// use catalog_ops::ApiBaseUrl;
///
/// let url = ApiBaseUrl::new("https://ops.example.com/api/").unwrap();
/// assert_eq!(url.as_ref(), "https://ops.example.com/api");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBaseUrl(String);

impl ApiBaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiBaseUrl`] if the URL is empty, or
    /// [`ConfigError::InvalidApiBaseUrl`] if it lacks an http(s) scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        if trimmed.is_empty() {
            return Err(ConfigError::EmptyApiBaseUrl);
        }

        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));

        match rest {
            Some(host) if !host.is_empty() && !host.starts_with('/') => {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(ConfigError::InvalidApiBaseUrl { url }),
        }
    }
}

impl AsRef<str> for ApiBaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated ISO 4217 currency code.
///
/// Codes are normalized to upper case.
///
/// # Serialization
///
/// `CurrencyCode` serializes to and deserializes from the bare code string:
///
/// ```rust
/// use catalog_ops::CurrencyCode;
///
/// let code = CurrencyCode::new("eur").unwrap();
/// assert_eq!(serde_json::to_string(&code).unwrap(), r#""EUR""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a new validated currency code.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCurrencyCode`] unless the code is exactly
    /// three ASCII letters.
    pub fn new(code: impl Into<String>) -> Result<Self, ConfigError> {
        let code = code.into();
        let normalized = code.trim().to_ascii_uppercase();

        if normalized.len() != 3 || !normalized.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidCurrencyCode { code });
        }

        Ok(Self(normalized))
    }

    /// The US dollar, used when no currency is configured.
    #[must_use]
    pub fn usd() -> Self {
        Self("USD".to_string())
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::usd()
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for CurrencyCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// Number of products shown per page of the product list.
///
/// # Example
///
/// ```rust
/// use catalog_ops::PageSize;
///
/// assert!(PageSize::new(0).is_err());
/// assert_eq!(PageSize::new(50).unwrap().get(), 50);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Default page size of the product table.
    pub const DEFAULT: usize = 25;

    /// Creates a new page size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroPageSize`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(ConfigError::ZeroPageSize)
    }

    /// Returns the page size as a plain number.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroUsize::MIN.saturating_add(Self::DEFAULT - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_url_trims_trailing_slash() {
        let url = ApiBaseUrl::new("https://ops.example.com/api///").unwrap();
        assert_eq!(url.as_ref(), "https://ops.example.com/api");
    }

    #[test]
    fn test_api_base_url_accepts_http_for_local_backends() {
        let url = ApiBaseUrl::new("http://127.0.0.1:4000").unwrap();
        assert_eq!(url.to_string(), "http://127.0.0.1:4000");
    }

    #[test]
    fn test_api_base_url_rejects_empty() {
        assert_eq!(ApiBaseUrl::new("  "), Err(ConfigError::EmptyApiBaseUrl));
    }

    #[test]
    fn test_api_base_url_rejects_missing_scheme() {
        assert!(matches!(
            ApiBaseUrl::new("ops.example.com"),
            Err(ConfigError::InvalidApiBaseUrl { .. })
        ));
        assert!(matches!(
            ApiBaseUrl::new("https://"),
            Err(ConfigError::InvalidApiBaseUrl { .. })
        ));
    }

    #[test]
    fn test_currency_code_normalizes_case() {
        assert_eq!(CurrencyCode::new("gbp").unwrap().as_ref(), "GBP");
    }

    #[test]
    fn test_currency_code_rejects_invalid() {
        assert!(CurrencyCode::new("US").is_err());
        assert!(CurrencyCode::new("US1").is_err());
        assert!(CurrencyCode::new("EURO").is_err());
    }

    #[test]
    fn test_currency_code_deserialize_validates() {
        let ok: CurrencyCode = serde_json::from_str(r#""cad""#).unwrap();
        assert_eq!(ok.as_ref(), "CAD");
        assert!(serde_json::from_str::<CurrencyCode>(r#""dollars""#).is_err());
    }

    #[test]
    fn test_page_size_default() {
        assert_eq!(PageSize::default().get(), PageSize::DEFAULT);
    }
}
