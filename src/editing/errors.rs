//! Error types for inline editing.

use thiserror::Error;

use crate::resources::ResourceError;

/// A value rejected before it is sent to the backend.
///
/// The editor stays open with the buffer intact.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// SKU is empty after trimming.
    #[error("SKU cannot be empty")]
    EmptySku,

    /// Name is empty after trimming.
    #[error("Product name cannot be empty")]
    EmptyName,

    /// Price is not a non-negative number.
    #[error("Please enter a valid price (got '{input}')")]
    InvalidPrice {
        /// The rejected input.
        input: String,
    },

    /// Quantity is not a non-negative whole number.
    #[error("Please enter a valid quantity (got '{input}')")]
    InvalidQuantity {
        /// The rejected input.
        input: String,
    },

    /// The product is stocked per warehouse and no warehouse is selected.
    #[error("Select a warehouse to change stock for this product")]
    WarehouseRequired,
}

/// Error returned by an inline edit operation.
#[derive(Debug, Error)]
pub enum EditError {
    /// The operation needs the editor to be in the editing state.
    #[error("No edit in progress")]
    NotEditing,

    /// The edit buffer failed validation; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend rejected the save; the editor is back in editing state.
    #[error(transparent)]
    Save(#[from] ResourceError),
}

impl EditError {
    /// The message to show the user, using the backend's own wording for
    /// rejected saves.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Save(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}
