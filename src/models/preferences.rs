//! Persisted product list preferences.

use serde::{Deserialize, Serialize};

use super::columns::{default_columns, ProductColumnConfig};
use super::filters::ProductFilterState;
use super::sort::ProductSortState;

/// A user's saved layout of the product list.
///
/// Fields missing from a saved document take their default, so documents
/// written by older clients still load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPreferences {
    /// Column layout, in display order.
    pub columns: Vec<ProductColumnConfig>,
    /// Default sort.
    pub sort_config: ProductSortState,
    /// Default filters.
    pub filters: ProductFilterState,
    /// Whether the filter panel is open.
    pub show_filters: bool,
}

impl Default for ProductPreferences {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            sort_config: ProductSortState::default(),
            filters: ProductFilterState::default(),
            show_filters: false,
        }
    }
}

/// A partial preferences write, sent with `PATCH`.
///
/// Only the sections that are `Some` are serialized.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesPatch {
    /// New column layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<ProductColumnConfig>>,
    /// New default sort.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_config: Option<ProductSortState>,
    /// New default filters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<ProductFilterState>,
    /// New filter panel state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_filters: Option<bool>,
}

impl PreferencesPatch {
    /// A patch replacing the column layout.
    #[must_use]
    pub fn columns(columns: Vec<ProductColumnConfig>) -> Self {
        Self {
            columns: Some(columns),
            ..Default::default()
        }
    }

    /// A patch replacing the default sort.
    #[must_use]
    pub fn sort_config(sort: ProductSortState) -> Self {
        Self {
            sort_config: Some(sort),
            ..Default::default()
        }
    }

    /// A patch replacing the default filters.
    #[must_use]
    pub fn filters(filters: ProductFilterState) -> Self {
        Self {
            filters: Some(filters),
            ..Default::default()
        }
    }

    /// A patch setting the filter panel state.
    #[must_use]
    pub fn show_filters(show: bool) -> Self {
        Self {
            show_filters: Some(show),
            ..Default::default()
        }
    }

    /// Returns `true` if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.columns.is_none()
            && self.sort_config.is_none()
            && self.filters.is_none()
            && self.show_filters.is_none()
    }
}
