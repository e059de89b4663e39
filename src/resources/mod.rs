//! Typed access to the dashboard backend.
//!
//! - [`ProductsApi`]: Product list, partial updates, bulk delete, platform import
//!   and warehouse inventory
//! - [`PreferencesApi`]: The signed-in user's product list preferences
//! - [`ResourceError`]: Semantic errors (not found, validation failed) over the
//!   transport errors
//!
//! Both clients wrap a [`RestClient`](crate::clients::RestClient) and make a
//! single attempt per call.

mod errors;
mod preferences;
mod products;

pub use errors::ResourceError;
pub use preferences::PreferencesApi;
pub use products::{ImportSummary, ProductsApi};
