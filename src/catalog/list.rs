//! Client-held product list.

use crate::models::{FieldChange, Product, UpdateOutcome};
use crate::resources::{ProductsApi, ResourceError};

/// The products fetched from the backend, updated in place after edits.
///
/// Saved edits are merged straight into the list: the server's copy when
/// the response carried one, the local change otherwise.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
    last_sync_warning: Option<String>,
}

impl ProductCatalog {
    /// Creates a catalog holding `products`.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            last_sync_warning: None,
        }
    }

    /// Fetches the product list from the backend.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the list cannot be fetched.
    pub async fn fetch(api: &ProductsApi) -> Result<Self, ResourceError> {
        let products = api.list().await?;
        let catalog = Self::new(products);
        catalog.log_hierarchy_violations();
        Ok(catalog)
    }

    /// Replaces the whole list, e.g. after a re-fetch or an import.
    pub fn replace_all(&mut self, products: Vec<Product>) {
        self.products = products;
        self.log_hierarchy_violations();
    }

    /// All products, in fetch order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The product with `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Replaces the product with the same id, or appends it.
    pub fn merge_product(&mut self, product: Product) {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product,
            None => self.products.push(product),
        }
    }

    /// Applies a field change to the local copy of one product.
    ///
    /// Returns `false` if the product is not in the list.
    pub fn apply_change(&mut self, id: &str, change: &FieldChange) -> bool {
        let Some(product) = self.products.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        product.apply_change(change);
        true
    }

    /// Merges the result of a saved edit.
    ///
    /// Uses the backend's product when present, otherwise applies `change`
    /// locally, and records any sync warning.
    pub fn apply_outcome(&mut self, id: &str, change: &FieldChange, outcome: UpdateOutcome) {
        self.last_sync_warning = outcome.sync_warning;
        match outcome.product {
            Some(product) if product.id == id => self.merge_product(product),
            _ => {
                if !self.apply_change(id, change) {
                    tracing::debug!(product_id = id, "saved product is no longer in the list");
                }
            }
        }
    }

    /// Removes the products with the given ids, returning how many were removed.
    pub fn remove(&mut self, ids: &[String]) -> usize {
        let before = self.products.len();
        self.products.retain(|p| !ids.contains(&p.id));
        before - self.products.len()
    }

    /// The warning from the most recent save, if it had one.
    #[must_use]
    pub fn last_sync_warning(&self) -> Option<&str> {
        self.last_sync_warning.as_deref()
    }

    /// Dismisses the sync warning banner.
    pub fn clear_sync_warning(&mut self) {
        self.last_sync_warning = None;
    }

    fn log_hierarchy_violations(&self) {
        for product in self.products.iter().filter(|p| p.violates_hierarchy()) {
            tracing::warn!(product_id = %product.id, "variant product carries its own variants");
        }
    }
}
