//! Filter engine: search text plus structured criteria.

use std::collections::HashSet;

use crate::models::{HasVariantsFilter, Product, ProductFilterState};

/// A compiled filter, ready to test products.
///
/// Search text is trimmed and lower-cased once; price bounds are parsed once.
/// A bound that does not parse as a number is not applied.
///
/// # Example
///
/// ```rust
/// use catalog_ops::catalog::ProductFilter;
/// use catalog_ops::models::{Product, ProductFilterState};
///
/// let products = vec![
///     Product { name: "Coffee Mug".into(), ..Default::default() },
///     Product { name: "Tee".into(), ..Default::default() },
/// ];
///
/// let state = ProductFilterState::default();
/// let filter = ProductFilter::new("mug", &state, true);
/// assert_eq!(filter.apply(&products).len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ProductFilter<'f> {
    search: String,
    state: &'f ProductFilterState,
    stock_management: bool,
    price_min: Option<f64>,
    price_max: Option<f64>,
    tags: HashSet<&'f str>,
}

fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn equals(wanted: &str, actual: &str) -> bool {
    wanted.is_empty() || wanted == actual
}

fn equals_opt(wanted: &str, actual: Option<&str>) -> bool {
    wanted.is_empty() || actual == Some(wanted)
}

impl<'f> ProductFilter<'f> {
    /// Compiles a filter.
    ///
    /// With `stock_management` off, the stock-status criterion is skipped.
    #[must_use]
    pub fn new(search: &str, state: &'f ProductFilterState, stock_management: bool) -> Self {
        Self {
            search: search.trim().to_lowercase(),
            state,
            stock_management,
            price_min: parse_bound(&state.price_min),
            price_max: parse_bound(&state.price_max),
            tags: state
                .tags
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// Returns `true` if the product satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product)
            && self.matches_fields(product)
            && self.matches_stock(product)
            && self.matches_price(product)
            && self.matches_tags(product)
            && self.matches_variants(product)
    }

    /// Keeps the matching products, in input order.
    pub fn apply<'a, I>(&self, products: I) -> Vec<&'a Product>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        products.into_iter().filter(|p| self.matches(p)).collect()
    }

    fn matches_search(&self, product: &Product) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.as_str();
        let hit = |text: &str| text.to_lowercase().contains(needle);

        hit(&product.name)
            || hit(&product.sku)
            || product.description.as_deref().is_some_and(hit)
            || product.tags.iter().any(|t| hit(t))
            || product.brand.as_deref().is_some_and(hit)
            || product.vendor.as_deref().is_some_and(hit)
    }

    fn matches_fields(&self, product: &Product) -> bool {
        let s = self.state;
        equals(&s.status, product.status.as_str())
            && equals(&s.visibility, product.visibility.as_str())
            && equals(&s.product_type, product.product_type.as_str())
            && equals_opt(&s.category, product.category.as_deref())
            && equals_opt(&s.vendor, product.vendor.as_deref())
            && equals_opt(&s.brand, product.brand.as_deref())
            && equals_opt(&s.platform, product.platform.as_deref())
            && equals_opt(&s.store_id, product.store_id.as_deref())
    }

    fn matches_stock(&self, product: &Product) -> bool {
        let status_ok = !self.stock_management
            || equals(&self.state.stock_status, product.stock_status.as_str());
        let warehouse_ok = self
            .state
            .warehouse()
            .map_or(true, |id| product.stocked_in(id));
        status_ok && warehouse_ok
    }

    fn matches_price(&self, product: &Product) -> bool {
        self.price_min.map_or(true, |min| product.price >= min)
            && self.price_max.map_or(true, |max| product.price <= max)
    }

    fn matches_tags(&self, product: &Product) -> bool {
        self.tags.is_empty() || product.tags.iter().any(|t| self.tags.contains(t.as_str()))
    }

    fn matches_variants(&self, product: &Product) -> bool {
        let has_variants_ok = match self.state.has_variants {
            HasVariantsFilter::Any => true,
            HasVariantsFilter::Yes => product.has_variants(),
            HasVariantsFilter::No => !product.has_variants(),
        };

        // parentOnly takes precedence over includeVariants; both exclude variants.
        let hierarchy_ok = if self.state.parent_only {
            !product.is_variant()
        } else {
            self.state.include_variants || !product.is_variant()
        };

        has_variants_ok && hierarchy_ok
    }
}

/// Filters `products` by search text and criteria, keeping input order.
#[must_use]
pub fn filter_products<'a>(
    products: &'a [Product],
    search: &str,
    filters: &ProductFilterState,
    stock_management: bool,
) -> Vec<&'a Product> {
    ProductFilter::new(search, filters, stock_management).apply(products)
}
