//! Product data model.
//!
//! This module provides the [`Product`] record as returned by `GET /products`,
//! together with its nested variant, warehouse stock and image records.
//!
//! Every optional or collection field defaults when absent so a partially
//! populated record from a platform sync never fails the whole list.
//!
//! # Example
//!
//! ```rust
//! use catalog_ops::models::{Product, ProductStatus};
//!
//! let product: Product = serde_json::from_value(serde_json::json!({
//!     "id": "p-1",
//!     "sku": "TSH-001",
//!     "name": "Classic Tee",
//!     "status": "active",
//!     "price": 29.99,
//!     "warehouseStock": [
//!         {"warehouseId": "w-1", "stockQuantity": 4},
//!         {"warehouseId": "w-2", "stockQuantity": 6}
//!     ]
//! })).unwrap();
//!
//! assert_eq!(product.status, ProductStatus::Active);
//! assert_eq!(product.total_stock(), 10);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;

/// Structural kind of a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    /// A single sellable item.
    #[default]
    Simple,
    /// A concrete SKU belonging to a configurable parent.
    Variant,
    /// A group of products sold together.
    Bundle,
    /// A parent product whose variants are the sellable SKUs.
    Configurable,
}

impl ProductType {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Variant => "variant",
            Self::Bundle => "bundle",
            Self::Configurable => "configurable",
        }
    }
}

/// Lifecycle status of a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Sellable.
    #[default]
    Active,
    /// Temporarily not sellable.
    Inactive,
    /// Not yet published.
    Draft,
    /// Retired.
    Archived,
}

impl ProductStatus {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Draft => "draft",
            Self::Archived => "archived",
        }
    }
}

/// Storefront visibility of a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductVisibility {
    /// Shown in catalog and search.
    #[default]
    Visible,
    /// Not shown anywhere.
    Hidden,
    /// Shown in catalog listings only.
    Catalog,
    /// Shown in search results only.
    Search,
}

impl ProductVisibility {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
            Self::Catalog => "catalog",
            Self::Search => "search",
        }
    }
}

/// Stock availability of a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// Available.
    #[default]
    InStock,
    /// Not available.
    OutOfStock,
    /// At or under the stock threshold.
    LowStock,
    /// Sold while out of stock.
    Backorder,
}

impl StockStatus {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::OutOfStock => "out_of_stock",
            Self::LowStock => "low_stock",
            Self::Backorder => "backorder",
        }
    }
}

/// Quantity of a product held in one warehouse.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseStock {
    /// The warehouse holding the stock.
    #[serde(default)]
    pub warehouse_id: String,

    /// On-hand quantity.
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub stock_quantity: i64,

    /// Quantity reserved by open orders.
    #[serde(
        default,
        deserialize_with = "lenient::opt_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub reserved_quantity: Option<i64>,

    /// Quantity that can still be sold.
    #[serde(
        default,
        deserialize_with = "lenient::opt_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub available_quantity: Option<i64>,

    /// Bin or shelf location inside the warehouse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl WarehouseStock {
    /// Quantity available for sale in this warehouse.
    ///
    /// Uses `availableQuantity` when the backend supplied it, else on-hand
    /// minus reserved (never below zero).
    #[must_use]
    pub fn available(&self) -> i64 {
        self.available_quantity.unwrap_or_else(|| {
            self.stock_quantity
                .saturating_sub(self.reserved_quantity.unwrap_or(0))
                .max(0)
        })
    }
}

/// A named attribute distinguishing a variant, e.g. `Color: Red`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct VariantAttribute {
    /// Attribute name.
    #[serde(default)]
    pub name: String,
    /// Attribute value.
    #[serde(default)]
    pub value: String,
}

/// A variant embedded in a configurable product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// The variant's product id.
    #[serde(default)]
    pub id: String,

    /// The variant's SKU.
    #[serde(default)]
    pub sku: String,

    /// The variant's display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The variant's price.
    #[serde(
        default,
        deserialize_with = "lenient::opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,

    /// On-hand quantity of the variant.
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub stock_quantity: i64,

    /// Attribute values of the variant.
    #[serde(default, alias = "variantAttributes")]
    pub attributes: Vec<VariantAttribute>,
}

/// An image attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    /// Image id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Public image URL.
    #[serde(default)]
    pub url: String,

    /// Alternative text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// Sort position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,

    /// Whether this is the primary image.
    #[serde(default)]
    pub is_primary: bool,
}

/// Physical dimensions of a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductDimensions {
    /// Length.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub length: Option<f64>,
    /// Width.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub width: Option<f64>,
    /// Height.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub height: Option<f64>,
    /// Unit of the three measures (e.g. `cm`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// A product in the catalog.
///
/// # Hierarchy
///
/// A product is either a variant of a parent (`parent_id` set) or may itself
/// hold `variants` when configurable. Nesting is one level deep: a product
/// with `parent_id` set must not carry variants of its own
/// (see [`Product::violates_hierarchy`]).
///
/// # Stock
///
/// `stock_quantity` is the global fallback. When `warehouse_stock` is present
/// and non-empty, [`Product::total_stock`] is the sum of its entries.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable opaque identifier.
    #[serde(default)]
    pub id: String,

    /// Business identifier; editable.
    #[serde(default)]
    pub sku: String,

    /// Identifier assigned by the source platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Long description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Short description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    /// Structural kind.
    #[serde(default, rename = "type")]
    pub product_type: ProductType,

    /// Lifecycle status.
    #[serde(default)]
    pub status: ProductStatus,

    /// Storefront visibility.
    #[serde(default)]
    pub visibility: ProductVisibility,

    /// Selling price.
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub price: f64,

    /// Compare-at (original) price.
    #[serde(
        default,
        deserialize_with = "lenient::opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub compare_price: Option<f64>,

    /// Unit cost.
    #[serde(
        default,
        deserialize_with = "lenient::opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub cost_price: Option<f64>,

    /// ISO 4217 currency code of the prices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Global on-hand quantity, used when no warehouse breakdown exists.
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub stock_quantity: i64,

    /// Stock availability.
    #[serde(default)]
    pub stock_status: StockStatus,

    /// Quantity at which the product counts as low stock.
    #[serde(
        default,
        deserialize_with = "lenient::opt_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub stock_threshold: Option<i64>,

    /// Whether stock is tracked for this product.
    #[serde(default)]
    pub track_quantity: bool,

    /// Per-warehouse stock breakdown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse_stock: Option<Vec<WarehouseStock>>,

    /// Parent product id, for variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// Parent product SKU, for variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_sku: Option<String>,

    /// Parent product name, for variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,

    /// Attribute values distinguishing this variant.
    #[serde(default)]
    pub variant_attributes: Vec<VariantAttribute>,

    /// Variants, for configurable products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<ProductVariant>>,

    /// Source platform (e.g. `Shopify`, `Woocommerce`, `manual`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    /// Store the product was synced from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,

    /// Integration the product was synced through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_id: Option<String>,

    /// Category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Vendor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// Brand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Images.
    #[serde(default)]
    pub images: Vec<ProductImage>,

    /// Barcode (EAN/UPC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    /// Shipping weight.
    #[serde(
        default,
        deserialize_with = "lenient::opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight: Option<f64>,

    /// Unit of `weight`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<String>,

    /// Physical dimensions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<ProductDimensions>,

    /// URL slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// SEO title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,

    /// SEO description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,

    /// When the product was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the product was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// When the product was published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

/// A product field read by name, as used by sorting and column rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// The product has no value for this field.
    Missing,
    /// Free text or an enum wire value.
    Text(String),
    /// A number.
    Number(f64),
    /// A timestamp.
    Date(DateTime<Utc>),
    /// A flag.
    Bool(bool),
    /// A list of strings.
    List(Vec<String>),
}

impl FieldValue {
    fn text(value: Option<&str>) -> Self {
        value.map_or(Self::Missing, |s| Self::Text(s.to_string()))
    }

    /// Renders the value as plain text.
    ///
    /// Numbers print without a trailing `.0`, lists are joined with `, `,
    /// dates use RFC 3339 and missing values are empty.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Missing => String::new(),
            Self::Text(s) => s.clone(),
            Self::Number(n) => format_number(*n),
            Self::Date(d) => d.to_rfc3339(),
            Self::Bool(b) => b.to_string(),
            Self::List(items) => items.join(", "),
        }
    }

    /// Coerces the value to a number, treating anything non-numeric as `0`.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse().ok().filter(|n: &f64| n.is_finite()).unwrap_or(0.0),
            Self::Bool(b) => f64::from(u8::from(*b)),
            _ => 0.0,
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[allow(clippy::cast_precision_loss)]
fn quantity(n: i64) -> FieldValue {
    FieldValue::Number(n as f64)
}

fn saturating_sum(quantities: impl Iterator<Item = i64>) -> i64 {
    quantities.fold(0, i64::saturating_add)
}

impl Product {
    /// Returns `true` if this product is a variant of another product.
    #[must_use]
    pub const fn is_variant(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Returns `true` if this product carries at least one variant.
    #[must_use]
    pub fn has_variants(&self) -> bool {
        self.variants.as_ref().is_some_and(|v| !v.is_empty())
    }

    /// Returns `true` if this record nests variants below a variant.
    #[must_use]
    pub fn violates_hierarchy(&self) -> bool {
        self.is_variant() && self.has_variants()
    }

    /// Total on-hand quantity across all warehouses.
    ///
    /// Sum of the warehouse breakdown when it is present and non-empty,
    /// otherwise the flat `stock_quantity`.
    #[must_use]
    pub fn total_stock(&self) -> i64 {
        match &self.warehouse_stock {
            Some(entries) if !entries.is_empty() => {
                saturating_sum(entries.iter().map(|w| w.stock_quantity))
            }
            _ => self.stock_quantity,
        }
    }

    /// Returns `true` if stock is tracked per warehouse, in which case the
    /// flat `stock_quantity` is not what the list shows.
    #[must_use]
    pub fn has_warehouse_breakdown(&self) -> bool {
        self.warehouse_stock.as_ref().is_some_and(|e| !e.is_empty())
    }

    /// The warehouse entry for `warehouse_id`, if any.
    #[must_use]
    pub fn warehouse(&self, warehouse_id: &str) -> Option<&WarehouseStock> {
        self.warehouse_stock
            .as_ref()?
            .iter()
            .find(|w| w.warehouse_id == warehouse_id)
    }

    /// Returns `true` if the product has a stock entry in `warehouse_id`.
    #[must_use]
    pub fn stocked_in(&self, warehouse_id: &str) -> bool {
        self.warehouse(warehouse_id).is_some()
    }

    /// On-hand quantity in one warehouse, or the total when `warehouse_id` is `None`.
    ///
    /// A product with no entry for the warehouse has zero stock there.
    #[must_use]
    pub fn stock_in(&self, warehouse_id: Option<&str>) -> i64 {
        match warehouse_id {
            Some(id) => self.warehouse(id).map_or(0, |w| w.stock_quantity),
            None => self.total_stock(),
        }
    }

    /// Sellable quantity in one warehouse, or across all warehouses.
    #[must_use]
    pub fn available_in(&self, warehouse_id: Option<&str>) -> i64 {
        match (warehouse_id, &self.warehouse_stock) {
            (Some(id), _) => self.warehouse(id).map_or(0, WarehouseStock::available),
            (None, Some(entries)) if !entries.is_empty() => {
                saturating_sum(entries.iter().map(WarehouseStock::available))
            }
            (None, _) => self.stock_quantity,
        }
    }

    /// URL of the primary image, falling back to the first image.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images
            .iter()
            .find(|img| img.is_primary)
            .or_else(|| self.images.first())
            .map(|img| img.url.as_str())
    }

    /// Reads a field by its camelCase wire name.
    ///
    /// `stockQuantity` reports [`Product::total_stock`]. Unknown names read as
    /// [`FieldValue::Missing`].
    #[must_use]
    pub fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::Text(self.id.clone()),
            "sku" => FieldValue::Text(self.sku.clone()),
            "externalId" => FieldValue::text(self.external_id.as_deref()),
            "name" => FieldValue::Text(self.name.clone()),
            "description" => FieldValue::text(self.description.as_deref()),
            "shortDescription" => FieldValue::text(self.short_description.as_deref()),
            "type" => FieldValue::Text(self.product_type.as_str().to_string()),
            "status" => FieldValue::Text(self.status.as_str().to_string()),
            "visibility" => FieldValue::Text(self.visibility.as_str().to_string()),
            "price" => FieldValue::Number(self.price),
            "comparePrice" => self.compare_price.map_or(FieldValue::Missing, FieldValue::Number),
            "costPrice" => self.cost_price.map_or(FieldValue::Missing, FieldValue::Number),
            "currency" => FieldValue::text(self.currency.as_deref()),
            "stockQuantity" => quantity(self.total_stock()),
            "stockStatus" => FieldValue::Text(self.stock_status.as_str().to_string()),
            "stockThreshold" => self.stock_threshold.map_or(FieldValue::Missing, quantity),
            "trackQuantity" => FieldValue::Bool(self.track_quantity),
            "parentId" => FieldValue::text(self.parent_id.as_deref()),
            "parentSku" => FieldValue::text(self.parent_sku.as_deref()),
            "parentName" => FieldValue::text(self.parent_name.as_deref()),
            "variantAttributes" => FieldValue::List(
                self.variant_attributes
                    .iter()
                    .map(|a| format!("{}: {}", a.name, a.value))
                    .collect(),
            ),
            "variants" => {
                #[allow(clippy::cast_possible_wrap)]
                let count = self.variants.as_ref().map_or(0, Vec::len) as i64;
                quantity(count)
            }
            "platform" => FieldValue::text(self.platform.as_deref()),
            "storeId" => FieldValue::text(self.store_id.as_deref()),
            "integrationId" => FieldValue::text(self.integration_id.as_deref()),
            "category" => FieldValue::text(self.category.as_deref()),
            "vendor" => FieldValue::text(self.vendor.as_deref()),
            "brand" => FieldValue::text(self.brand.as_deref()),
            "tags" => FieldValue::List(self.tags.clone()),
            "image" | "images" => FieldValue::text(self.primary_image()),
            "barcode" => FieldValue::text(self.barcode.as_deref()),
            "weight" => self.weight.map_or(FieldValue::Missing, FieldValue::Number),
            "slug" => FieldValue::text(self.slug.as_deref()),
            "seoTitle" => FieldValue::text(self.seo_title.as_deref()),
            "seoDescription" => FieldValue::text(self.seo_description.as_deref()),
            "createdAt" => self.created_at.map_or(FieldValue::Missing, FieldValue::Date),
            "updatedAt" => self.updated_at.map_or(FieldValue::Missing, FieldValue::Date),
            "publishedAt" => self.published_at.map_or(FieldValue::Missing, FieldValue::Date),
            _ => FieldValue::Missing,
        }
    }
}
