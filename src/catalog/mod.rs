//! The product list pipeline.
//!
//! Raw products flow through the filter engine, the sort engine and
//! pagination, and the visible columns are projected into rendered cells:
//!
//! ```text
//! ProductCatalog -> ProductFilter -> sort_products -> paginate -> CellFormatter
//! ```
//!
//! - [`ProductCatalog`]: The fetched list, updated in place after edits
//! - [`ProductListView`]: Search, filters, sort and page, rendering a [`RenderedPage`]
//! - [`ProductFilter`] / [`filter_products`]: Search text and structured criteria
//! - [`sort_products`]: Stable, type-aware ordering
//! - [`paginate`] / [`PageInfo`]: Fixed-size pages
//! - [`CellFormatter`]: Per-column display text, shared with [`export_csv`]
//!
//! Every step is a pure function of its inputs and never mutates the list it
//! is given.

mod export;
mod filter;
mod format;
mod list;
mod pagination;
mod sort;
mod view;

pub use export::{export_csv, export_filename, export_selection};
pub use filter::{filter_products, ProductFilter};
pub use format::{format_currency, format_date, CellFormatter, CellValue};
pub use list::ProductCatalog;
pub use pagination::{paginate, total_pages, PageInfo};
pub use sort::{compare_field, sort_products, DATE_FIELDS, NUMERIC_FIELDS};
pub use view::{ProductListView, RenderedPage, RenderedRow};
