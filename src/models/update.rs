//! Partial product updates.
//!
//! [`FieldChange`] is what an inline editor produces; [`ProductUpdate`] is the
//! partial body sent with `PUT /products/:id`.

use serde::Serialize;

use super::product::{Product, ProductStatus, ProductVisibility};

/// A single validated field edit.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    /// New SKU, already trimmed.
    Sku(String),
    /// New display name, already trimmed.
    Name(String),
    /// New non-negative price.
    Price(f64),
    /// New non-negative quantity, optionally scoped to one warehouse.
    Quantity {
        /// The quantity.
        quantity: i64,
        /// Warehouse the quantity applies to; `None` sets the global quantity.
        warehouse_id: Option<String>,
    },
}

impl FieldChange {
    /// The product field this change targets (camelCase wire name).
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Sku(_) => "sku",
            Self::Name(_) => "name",
            Self::Price(_) => "price",
            Self::Quantity { .. } => "stockQuantity",
        }
    }
}

/// Partial body for `PUT /products/:id`.
///
/// Only fields that are `Some` are serialized.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    /// New SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// New compare-at price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_price: Option<f64>,
    /// New cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,
    /// New global quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    /// New visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<ProductVisibility>,
    /// New category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// New tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl ProductUpdate {
    /// Returns `true` if the update changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<&FieldChange> for ProductUpdate {
    fn from(change: &FieldChange) -> Self {
        match change {
            FieldChange::Sku(sku) => Self {
                sku: Some(sku.clone()),
                ..Default::default()
            },
            FieldChange::Name(name) => Self {
                name: Some(name.clone()),
                ..Default::default()
            },
            FieldChange::Price(price) => Self {
                price: Some(*price),
                ..Default::default()
            },
            FieldChange::Quantity { quantity, .. } => Self {
                stock_quantity: Some(*quantity),
                ..Default::default()
            },
        }
    }
}

/// Result of a successful product write.
///
/// A platform-synced product can be saved locally while the push to the
/// platform fails; the backend then reports `_syncWarning` next to the saved
/// product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateOutcome {
    /// The product as stored by the backend, when the response carried it.
    pub product: Option<Product>,
    /// Partial-success warning to show alongside the saved value.
    pub sync_warning: Option<String>,
}

impl UpdateOutcome {
    /// Returns `true` if the save succeeded with a warning.
    #[must_use]
    pub const fn has_warning(&self) -> bool {
        self.sync_warning.is_some()
    }
}

impl Product {
    /// Applies a field edit to the local copy.
    ///
    /// A warehouse-scoped quantity updates (or creates) that warehouse entry.
    pub fn apply_change(&mut self, change: &FieldChange) {
        match change {
            FieldChange::Sku(sku) => self.sku.clone_from(sku),
            FieldChange::Name(name) => self.name.clone_from(name),
            FieldChange::Price(price) => self.price = *price,
            FieldChange::Quantity {
                quantity,
                warehouse_id: None,
            } => self.stock_quantity = *quantity,
            FieldChange::Quantity {
                quantity,
                warehouse_id: Some(id),
            } => {
                let entries = self.warehouse_stock.get_or_insert_with(Vec::new);
                if let Some(entry) = entries.iter_mut().find(|w| &w.warehouse_id == id) {
                    entry.stock_quantity = *quantity;
                    entry.available_quantity = None;
                } else {
                    entries.push(super::product::WarehouseStock {
                        warehouse_id: id.clone(),
                        stock_quantity: *quantity,
                        ..Default::default()
                    });
                }
            }
        }
    }

    /// Applies a partial update to the local copy.
    pub fn apply_update(&mut self, update: &ProductUpdate) {
        if let Some(sku) = &update.sku {
            self.sku.clone_from(sku);
        }
        if let Some(name) = &update.name {
            self.name.clone_from(name);
        }
        if let Some(description) = &update.description {
            self.description = Some(description.clone());
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(compare_price) = update.compare_price {
            self.compare_price = Some(compare_price);
        }
        if let Some(cost_price) = update.cost_price {
            self.cost_price = Some(cost_price);
        }
        if let Some(quantity) = update.stock_quantity {
            self.stock_quantity = quantity;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(visibility) = update.visibility {
            self.visibility = visibility;
        }
        if let Some(category) = &update.category {
            self.category = Some(category.clone());
        }
        if let Some(tags) = &update.tags {
            self.tags.clone_from(tags);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WarehouseStock;
    use serde_json::json;

    #[test]
    fn test_update_serializes_only_set_fields() {
        let update = ProductUpdate::from(&FieldChange::Price(35.5));
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({"price": 35.5}));

        let update = ProductUpdate::from(&FieldChange::Quantity {
            quantity: 4,
            warehouse_id: None,
        });
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"stockQuantity": 4})
        );
    }

    #[test]
    fn test_apply_change_updates_local_copy() {
        let mut product = Product {
            sku: "OLD".to_string(),
            price: 29.99,
            ..Default::default()
        };

        product.apply_change(&FieldChange::Sku("NEW".to_string()));
        product.apply_change(&FieldChange::Price(35.5));

        assert_eq!(product.sku, "NEW");
        assert!((product.price - 35.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_apply_warehouse_quantity() {
        let mut product = Product {
            warehouse_stock: Some(vec![WarehouseStock {
                warehouse_id: "w-1".to_string(),
                stock_quantity: 2,
                available_quantity: Some(2),
                ..Default::default()
            }]),
            ..Default::default()
        };

        product.apply_change(&FieldChange::Quantity {
            quantity: 7,
            warehouse_id: Some("w-1".to_string()),
        });
        product.apply_change(&FieldChange::Quantity {
            quantity: 3,
            warehouse_id: Some("w-2".to_string()),
        });

        assert_eq!(product.stock_in(Some("w-1")), 7);
        assert_eq!(product.available_in(Some("w-1")), 7);
        assert_eq!(product.total_stock(), 10);
    }

    #[test]
    fn test_apply_update_sets_status() {
        let mut product = Product::default();
        product.apply_update(&ProductUpdate {
            status: Some(ProductStatus::Archived),
            tags: Some(vec!["sale".to_string()]),
            ..Default::default()
        });
        assert_eq!(product.status, ProductStatus::Archived);
        assert_eq!(product.tags, vec!["sale"]);
    }
}
