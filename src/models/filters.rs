//! Structured filter state of the product list.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Tri-state filter on whether a product carries variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HasVariantsFilter {
    /// No constraint (wire value `""`).
    #[default]
    Any,
    /// Only products with at least one variant (`"yes"`).
    Yes,
    /// Only products without variants (`"no"`).
    No,
}

impl HasVariantsFilter {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "",
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl Serialize for HasVariantsFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HasVariantsFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(match value.as_deref().map(str::trim) {
            Some("yes") => Self::Yes,
            Some("no") => Self::No,
            _ => Self::Any,
        })
    }
}

/// Filter criteria for the product list.
///
/// Every string field is unconstrained when empty; `tags` is unconstrained
/// when empty; `parent_only` is unconstrained when `false` and
/// `include_variants` when `true`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFilterState {
    /// Exact status wire value.
    pub status: String,
    /// Exact visibility wire value.
    pub visibility: String,
    /// Exact product type wire value.
    #[serde(rename = "type")]
    pub product_type: String,
    /// Exact stock status wire value.
    pub stock_status: String,
    /// Exact category.
    pub category: String,
    /// Exact vendor.
    pub vendor: String,
    /// Exact brand.
    pub brand: String,
    /// Exact platform.
    pub platform: String,
    /// Exact store id.
    pub store_id: String,
    /// Lower price bound; applied only when it parses as a number.
    pub price_min: String,
    /// Upper price bound; applied only when it parses as a number.
    pub price_max: String,
    /// Products matching any of these tags.
    pub tags: Vec<String>,
    /// Variant presence.
    pub has_variants: HasVariantsFilter,
    /// Only products that are not variants.
    pub parent_only: bool,
    /// When `false`, variants are excluded.
    pub include_variants: bool,
    /// Only products stocked in this warehouse.
    pub warehouse_id: String,
}

impl Default for ProductFilterState {
    fn default() -> Self {
        Self {
            status: String::new(),
            visibility: String::new(),
            product_type: String::new(),
            stock_status: String::new(),
            category: String::new(),
            vendor: String::new(),
            brand: String::new(),
            platform: String::new(),
            store_id: String::new(),
            price_min: String::new(),
            price_max: String::new(),
            tags: Vec::new(),
            has_variants: HasVariantsFilter::Any,
            parent_only: false,
            include_variants: true,
            warehouse_id: String::new(),
        }
    }
}

impl ProductFilterState {
    /// Returns `true` when no field constrains the result.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }

    /// Number of active constraints, for a filter badge.
    #[must_use]
    pub fn active_count(&self) -> usize {
        let strings = [
            &self.status,
            &self.visibility,
            &self.product_type,
            &self.stock_status,
            &self.category,
            &self.vendor,
            &self.brand,
            &self.platform,
            &self.store_id,
            &self.price_min,
            &self.price_max,
            &self.warehouse_id,
        ];
        strings.iter().filter(|s| !s.trim().is_empty()).count()
            + usize::from(!self.tags.is_empty())
            + usize::from(self.has_variants != HasVariantsFilter::Any)
            + usize::from(self.parent_only)
            + usize::from(!self.include_variants)
    }

    /// The active warehouse id, if the warehouse filter is set.
    #[must_use]
    pub fn warehouse(&self) -> Option<&str> {
        let id = self.warehouse_id.trim();
        (!id.is_empty()).then_some(id)
    }
}
