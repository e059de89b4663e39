//! Editable cells and their parsing rules.

use crate::editing::errors::ValidationError;
use crate::models::{FieldChange, Product};

/// A product field that can be edited inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditableField {
    /// `sku`: non-empty after trim.
    Sku,
    /// `name`: non-empty after trim.
    Name,
    /// `price`: non-negative number.
    Price,
    /// `stockQuantity`: non-negative whole number.
    Quantity,
}

impl EditableField {
    /// Returns `true` if leaving the cell commits the edit.
    ///
    /// Only the quantity cell commits on blur; the others wait for Enter.
    #[must_use]
    pub const fn commits_on_blur(self) -> bool {
        matches!(self, Self::Quantity)
    }

    /// The current value as edit-buffer text.
    ///
    /// With a warehouse, the quantity is that warehouse's on-hand stock.
    #[must_use]
    pub fn current_value(self, product: &Product, warehouse_id: Option<&str>) -> String {
        match self {
            Self::Sku => product.sku.clone(),
            Self::Name => product.name.clone(),
            Self::Price => product.field("price").to_text(),
            Self::Quantity => product.stock_in(warehouse_id).to_string(),
        }
    }

    /// Validates the buffer and turns it into a change.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for this field when the input is empty
    /// or not a non-negative number.
    pub fn parse(self, input: &str, warehouse_id: Option<&str>) -> Result<FieldChange, ValidationError> {
        let value = input.trim();
        match self {
            Self::Sku if value.is_empty() => Err(ValidationError::EmptySku),
            Self::Sku => Ok(FieldChange::Sku(value.to_string())),
            Self::Name if value.is_empty() => Err(ValidationError::EmptyName),
            Self::Name => Ok(FieldChange::Name(value.to_string())),
            Self::Price => value
                .parse::<f64>()
                .ok()
                .filter(|price| price.is_finite() && *price >= 0.0)
                // "-0" passes the filter; store it as 0
                .map(|price| FieldChange::Price(price.abs()))
                .ok_or_else(|| ValidationError::InvalidPrice {
                    input: input.to_string(),
                }),
            Self::Quantity => value
                .parse::<i64>()
                .ok()
                .filter(|quantity| *quantity >= 0)
                .map(|quantity| FieldChange::Quantity {
                    quantity,
                    warehouse_id: warehouse_id.map(ToString::to_string),
                })
                .ok_or_else(|| ValidationError::InvalidQuantity {
                    input: input.to_string(),
                }),
        }
    }
}
