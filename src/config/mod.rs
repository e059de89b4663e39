//! Configuration types for the catalog operations library.
//!
//! This module provides the configuration used to reach the dashboard backend
//! and to drive the product list view.
//!
//! # Overview
//!
//! - [`CatalogConfig`]: The main configuration struct
//! - [`CatalogConfigBuilder`]: A builder for constructing [`CatalogConfig`] instances
//! - [`ApiBaseUrl`]: A validated backend base URL
//! - [`CurrencyCode`]: A validated ISO 4217 currency code
//! - [`PageSize`]: A non-zero page size
//!
//! # Example
//!
//! ```rust
//! use catalog_ops::{ApiBaseUrl, CatalogConfig, PageSize};
//!
//! let config = CatalogConfig::builder()
//!     .api_base_url(ApiBaseUrl::new("https://ops.example.com/api").unwrap())
//!     .page_size(PageSize::new(50).unwrap())
//!     .stock_management(false)
//!     .build()
//!     .unwrap();
//!
//! assert!(!config.stock_management());
//! ```

mod newtypes;

pub use newtypes::{ApiBaseUrl, CurrencyCode, PageSize};

use crate::error::ConfigError;

/// Configuration for the catalog operations library.
///
/// Configuration is instance-based and passed explicitly; nothing is read from
/// ambient storage.
///
/// # Thread Safety
///
/// `CatalogConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    api_base_url: ApiBaseUrl,
    page_size: PageSize,
    default_currency: CurrencyCode,
    stock_management: bool,
    user_agent_prefix: Option<String>,
}

impl CatalogConfig {
    /// Creates a new builder for constructing a `CatalogConfig`.
    #[must_use]
    pub fn builder() -> CatalogConfigBuilder {
        CatalogConfigBuilder::new()
    }

    /// Returns the backend base URL.
    #[must_use]
    pub const fn api_base_url(&self) -> &ApiBaseUrl {
        &self.api_base_url
    }

    /// Returns the number of products per page.
    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Returns the currency used when a product carries none.
    #[must_use]
    pub const fn default_currency(&self) -> &CurrencyCode {
        &self.default_currency
    }

    /// Returns whether stock management is enabled for this account.
    ///
    /// When disabled, the stock-status filter is ignored.
    #[must_use]
    pub const fn stock_management(&self) -> bool {
        self.stock_management
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify CatalogConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CatalogConfig>();
};

/// Builder for constructing [`CatalogConfig`] instances.
///
/// The only required field is `api_base_url`.
///
/// # Defaults
///
/// - `page_size`: 25
/// - `default_currency`: `USD`
/// - `stock_management`: `true`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct CatalogConfigBuilder {
    api_base_url: Option<ApiBaseUrl>,
    page_size: Option<PageSize>,
    default_currency: Option<CurrencyCode>,
    stock_management: Option<bool>,
    user_agent_prefix: Option<String>,
}

impl CatalogConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend base URL (required).
    #[must_use]
    pub fn api_base_url(mut self, url: ApiBaseUrl) -> Self {
        self.api_base_url = Some(url);
        self
    }

    /// Sets the page size of the product list.
    #[must_use]
    pub const fn page_size(mut self, size: PageSize) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Sets the fallback currency.
    #[must_use]
    pub fn default_currency(mut self, currency: CurrencyCode) -> Self {
        self.default_currency = Some(currency);
        self
    }

    /// Sets whether stock management is enabled.
    #[must_use]
    pub const fn stock_management(mut self, enabled: bool) -> Self {
        self.stock_management = Some(enabled);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`CatalogConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_base_url` is not set.
    pub fn build(self) -> Result<CatalogConfig, ConfigError> {
        let api_base_url = self.api_base_url.ok_or(ConfigError::MissingRequiredField {
            field: "api_base_url",
        })?;

        Ok(CatalogConfig {
            api_base_url,
            page_size: self.page_size.unwrap_or_default(),
            default_currency: self.default_currency.unwrap_or_default(),
            stock_management: self.stock_management.unwrap_or(true),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
