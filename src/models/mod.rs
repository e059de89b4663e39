//! Domain types for the product list.
//!
//! # Overview
//!
//! - [`Product`]: A catalog product with its variants, stock and images
//! - [`ProductColumnConfig`]: One column of the product list layout
//! - [`ProductFilterState`]: Structured filter criteria
//! - [`ProductSortState`]: The single active sort key
//! - [`ProductPreferences`]: A user's persisted list layout
//! - [`FieldChange`] and [`ProductUpdate`]: Edits sent to the backend

mod columns;
mod filters;
pub(crate) mod lenient;
mod preferences;
mod product;
mod sort;
mod update;

pub use columns::{default_columns, ProductColumnConfig};
pub use filters::{HasVariantsFilter, ProductFilterState};
pub use preferences::{PreferencesPatch, ProductPreferences};
pub use product::{
    FieldValue, Product, ProductDimensions, ProductImage, ProductStatus, ProductType,
    ProductVariant, ProductVisibility, StockStatus, VariantAttribute, WarehouseStock,
};
pub use sort::{ProductSortState, SortDirection};
pub use update::{FieldChange, ProductUpdate, UpdateOutcome};
