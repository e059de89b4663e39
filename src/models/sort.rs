//! Sort state of the product list.

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Natural comparator order.
    #[default]
    Asc,
    /// Reverse order.
    Desc,
}

impl SortDirection {
    /// Returns the other direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// The single active sort key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductSortState {
    /// Field name (camelCase wire name).
    pub field: String,
    /// Direction.
    #[serde(default)]
    pub direction: SortDirection,
}

impl ProductSortState {
    /// Creates a sort state.
    #[must_use]
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// The sort state after clicking the header of `field`.
    ///
    /// Clicking the active field flips direction; a new field starts ascending.
    #[must_use]
    pub fn clicked(&self, field: &str) -> Self {
        if self.field == field {
            Self::new(field, self.direction.toggled())
        } else {
            Self::new(field, SortDirection::Asc)
        }
    }
}

impl Default for ProductSortState {
    /// Most recently updated first.
    fn default() -> Self {
        Self::new("updatedAt", SortDirection::Desc)
    }
}
