//! Column layout of the product list.
//!
//! The column list is ordered: its array order is the display order. Moving a
//! column changes its position in the `Vec`; there is no rank field.

use serde::{Deserialize, Serialize};

/// One column of the product list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductColumnConfig {
    /// Stable column id, used to reconcile saved layouts with the default schema.
    pub id: String,
    /// The product field the column renders (camelCase wire name).
    pub field: String,
    /// Header label.
    pub label: String,
    /// Whether clicking the header sorts by this column.
    #[serde(default)]
    pub sortable: bool,
    /// Whether the column is shown.
    #[serde(default = "default_visible")]
    pub visible: bool,
}

const fn default_visible() -> bool {
    true
}

impl ProductColumnConfig {
    /// Creates a column whose id equals its field.
    #[must_use]
    pub fn new(field: &str, label: &str, sortable: bool, visible: bool) -> Self {
        Self {
            id: field.to_string(),
            field: field.to_string(),
            label: label.to_string(),
            sortable,
            visible,
        }
    }
}

/// The default column schema.
///
/// Saved layouts are merged onto this list on load, so columns added here
/// appear for existing users with their default visibility.
#[must_use]
pub fn default_columns() -> Vec<ProductColumnConfig> {
    vec![
        ProductColumnConfig::new("image", "Image", false, true),
        ProductColumnConfig::new("name", "Name", true, true),
        ProductColumnConfig::new("sku", "SKU", true, true),
        ProductColumnConfig::new("type", "Type", true, false),
        ProductColumnConfig::new("status", "Status", true, true),
        ProductColumnConfig::new("price", "Price", true, true),
        ProductColumnConfig::new("comparePrice", "Compare Price", true, false),
        ProductColumnConfig::new("costPrice", "Cost", true, false),
        ProductColumnConfig::new("stockQuantity", "Stock", true, true),
        ProductColumnConfig::new("stockStatus", "Stock Status", true, true),
        ProductColumnConfig::new("category", "Category", true, true),
        ProductColumnConfig::new("vendor", "Vendor", true, false),
        ProductColumnConfig::new("brand", "Brand", true, false),
        ProductColumnConfig::new("platform", "Platform", true, true),
        ProductColumnConfig::new("tags", "Tags", false, false),
        ProductColumnConfig::new("variantAttributes", "Variant", false, false),
        ProductColumnConfig::new("barcode", "Barcode", true, false),
        ProductColumnConfig::new("weight", "Weight", true, false),
        ProductColumnConfig::new("createdAt", "Created", true, false),
        ProductColumnConfig::new("updatedAt", "Updated", true, true),
        ProductColumnConfig::new("publishedAt", "Published", true, false),
    ]
}
