//! # Catalog Ops
//!
//! The product list of a multi-channel commerce operations dashboard
//! (Shopify, WooCommerce and manual stores), as a library: the view-model
//! pipeline that turns the fetched product list into table rows, the
//! per-user column and preference store, inline cell editing, CSV export,
//! and typed clients for the backend endpoints behind them.
//!
//! ## Overview
//!
//! - Type-safe configuration via [`CatalogConfig`] and [`CatalogConfigBuilder`]
//! - An explicitly injected [`Session`] carrying the bearer token
//! - The [`models`] of a product, its columns, filters, sort and preferences
//! - The [`catalog`] pipeline: filter, sort, paginate, project, export
//! - The [`preferences`] store, merged onto the default column schema
//! - [`editing`] state machines for SKU, name, price and quantity cells
//! - [`resources`] for `/products` and `/users/preferences/products`
//!
//! ## Quick Start
//!
//! ```rust
//! use catalog_ops::{ApiBaseUrl, CatalogConfig, PageSize};
//!
//! let config = CatalogConfig::builder()
//!     .api_base_url(ApiBaseUrl::new("https://ops.example.com/api").unwrap())
//!     .page_size(PageSize::new(50).unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.page_size().get(), 50);
//! ```
//!
//! ## Rendering the Product Table
//!
//! ```rust,ignore
//! use catalog_ops::{
//!     PreferenceStore, PreferencesApi, ProductCatalog, ProductListView, ProductsApi,
//!     RestClient, Session,
//! };
//!
//! let session = Session::new("session-id", Some("user-1".into()), "access-token", None);
//! let products_api = ProductsApi::new(RestClient::new(&session, &config));
//! let mut store = PreferenceStore::new(PreferencesApi::new(RestClient::new(&session, &config)));
//!
//! let catalog = ProductCatalog::fetch(&products_api).await?;
//! store.load().await;
//!
//! let mut view = ProductListView::new(&config);
//! view.apply_preferences(store.preferences());
//! view.set_search("mug");
//!
//! let page = view.render(catalog.products(), store.columns());
//! for row in &page.rows {
//!     println!("{}: {:?}", row.product_id, row.cells);
//! }
//! ```
//!
//! ## Inline Editing
//!
//! ```rust,ignore
//! use catalog_ops::editing::{EditKey, EditAction, EditableField, InlineEditSession};
//!
//! let mut session = InlineEditSession::new();
//! let editor = session.begin(product, EditableField::Price);
//! editor.input("35.5");
//!
//! if editor.key(EditKey::Enter) == EditAction::Commit {
//!     match editor.commit(Some(&products_api)).await {
//!         Ok(Some(saved)) => catalog.apply_outcome(&product.id, &saved.change, saved.outcome),
//!         Ok(None) => {}
//!         Err(e) => eprintln!("{}", e.user_message()),
//!     }
//! }
//! ```
//!
//! ## Failure Policy
//!
//! Every backend call is attempted once, without timeout or retry. Edit and
//! list failures are returned to the caller with the backend's own message.
//! Preference persistence failures are logged through `tracing` and
//! otherwise ignored.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber.

pub mod auth;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod editing;
pub mod error;
pub mod models;
pub mod preferences;
pub mod resources;

// Re-export public types at crate root for convenience
pub use auth::Session;
pub use config::{ApiBaseUrl, CatalogConfig, CatalogConfigBuilder, CurrencyCode, PageSize};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RestClient, RestError,
};

// Re-export the product list surface
pub use catalog::{ProductCatalog, ProductListView, RenderedPage};
pub use editing::{EditError, InlineEditSession, InlineEditor, ProductUpdater, ValidationError};
pub use models::{
    FieldChange, Product, ProductColumnConfig, ProductFilterState, ProductPreferences,
    ProductSortState, ProductUpdate, SortDirection, UpdateOutcome,
};
pub use preferences::{PreferenceStore, PreferencesBackend, PreferencesError};
pub use resources::{ImportSummary, PreferencesApi, ProductsApi, ResourceError};
