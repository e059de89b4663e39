//! Product endpoints of the dashboard backend.
//!
//! # Endpoints
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`ProductsApi::list`] | `GET /products` |
//! | [`ProductsApi::update`] | `PUT /products/:id` |
//! | [`ProductsApi::bulk_delete`] | `POST /products/bulk-delete` |
//! | [`ProductsApi::import`] | `POST /products/import/:integrationId` |
//! | [`ProductsApi::update_warehouse_inventory`] | `PUT /products/:id/warehouse/:warehouseId/inventory` |
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_ops::{ProductsApi, ProductUpdate, RestClient};
//!
//! let api = ProductsApi::new(RestClient::new(&session, &config));
//! let products = api.list().await?;
//!
//! let update = ProductUpdate { price: Some(35.5), ..Default::default() };
//! let outcome = api.update(&products[0].id, &update).await?;
//! if let Some(warning) = outcome.sync_warning {
//!     println!("Saved, but: {warning}");
//! }
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::clients::{HttpResponse, RestClient};
use crate::editing::ProductUpdater;
use crate::models::{FieldChange, Product, ProductUpdate, UpdateOutcome};
use crate::resources::errors::ResourceError;

const RESOURCE: &str = "Product";

/// Counts reported by a platform import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportSummary {
    /// Products created by the import.
    #[serde(alias = "created")]
    pub imported: u64,
    /// Existing products refreshed by the import.
    pub updated: u64,
    /// Products left untouched.
    pub skipped: u64,
    /// Products that failed to import.
    pub failed: u64,
    /// Per-product failure messages.
    pub errors: Vec<String>,
    /// Summary message from the backend.
    pub message: Option<String>,
}

impl ImportSummary {
    /// Total number of products the import processed.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.imported + self.updated + self.skipped + self.failed
    }
}

/// Client for the product endpoints.
///
/// `ProductsApi` implements [`ProductUpdater`], so it can be handed to an
/// inline editor directly.
#[derive(Debug)]
pub struct ProductsApi {
    client: RestClient,
}

// Verify ProductsApi is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ProductsApi>();
};

impl ProductsApi {
    /// Creates a products client on top of a REST client.
    #[must_use]
    pub const fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// Returns the underlying REST client.
    #[must_use]
    pub const fn client(&self) -> &RestClient {
        &self.client
    }

    /// Fetches every product of the account.
    ///
    /// The backend answers either with a bare array or with
    /// `{"products": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the body is not a
    /// product list.
    pub async fn list(&self) -> Result<Vec<Product>, ResourceError> {
        let response = self
            .client
            .get("products")
            .await
            .map_err(|e| ResourceError::from_rest_error(e, RESOURCE, None))?;

        let list = match response.body {
            serde_json::Value::Object(mut map) => map
                .remove("products")
                .or_else(|| map.remove("data"))
                .unwrap_or(serde_json::Value::Array(Vec::new())),
            other => other,
        };

        let products: Vec<Product> = serde_json::from_value(list).map_err(|source| {
            ResourceError::Deserialize {
                resource: RESOURCE,
                source,
            }
        })?;

        tracing::debug!(count = products.len(), "fetched products");
        Ok(products)
    }

    /// Applies a partial update to one product.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] for an unknown id,
    /// [`ResourceError::ValidationFailed`] when the backend rejects the values,
    /// and [`ResourceError::Http`] carrying the backend message otherwise.
    pub async fn update(
        &self,
        id: &str,
        update: &ProductUpdate,
    ) -> Result<UpdateOutcome, ResourceError> {
        let body = serde_json::to_value(update).map_err(|source| ResourceError::Deserialize {
            resource: RESOURCE,
            source,
        })?;
        let path = format!("products/{}", urlencoding::encode(id));

        let response = self
            .client
            .put(&path, body)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, RESOURCE, Some(id)))?;

        outcome_from_response(id, &response)
    }

    /// Deletes several products at once and returns how many were deleted.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn bulk_delete(&self, ids: &[String]) -> Result<usize, ResourceError> {
        let response = self
            .client
            .post("products/bulk-delete", json!({ "ids": ids }))
            .await
            .map_err(|e| ResourceError::from_rest_error(e, RESOURCE, None))?;

        let deleted = ["deleted", "deletedCount", "count"]
            .iter()
            .find_map(|key| response.body.get(*key).and_then(serde_json::Value::as_u64))
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(ids.len());

        tracing::debug!(requested = ids.len(), deleted, "bulk-deleted products");
        Ok(deleted)
    }

    /// Imports products from a platform integration.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] for an unknown integration and
    /// [`ResourceError`] for any other failure.
    pub async fn import(&self, integration_id: &str) -> Result<ImportSummary, ResourceError> {
        let path = format!("products/import/{}", urlencoding::encode(integration_id));

        let response = self
            .client
            .post(&path, json!({}))
            .await
            .map_err(|e| ResourceError::from_rest_error(e, "Integration", Some(integration_id)))?;

        let body = match response.body {
            serde_json::Value::Object(mut map) if map.contains_key("summary") => map
                .remove("summary")
                .unwrap_or(serde_json::Value::Null),
            other => other,
        };

        let summary: ImportSummary =
            serde_json::from_value(body).map_err(|source| ResourceError::Deserialize {
                resource: "ImportSummary",
                source,
            })?;

        tracing::debug!(
            integration_id,
            imported = summary.imported,
            updated = summary.updated,
            failed = summary.failed,
            "imported products"
        );
        Ok(summary)
    }

    /// Sets the on-hand quantity of a product in one warehouse.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn update_warehouse_inventory(
        &self,
        id: &str,
        warehouse_id: &str,
        quantity: i64,
    ) -> Result<UpdateOutcome, ResourceError> {
        let path = format!(
            "products/{}/warehouse/{}/inventory",
            urlencoding::encode(id),
            urlencoding::encode(warehouse_id)
        );

        let response = self
            .client
            .put(&path, json!({ "quantity": quantity }))
            .await
            .map_err(|e| ResourceError::from_rest_error(e, RESOURCE, Some(id)))?;

        outcome_from_response(id, &response)
    }
}

#[async_trait]
impl ProductUpdater for ProductsApi {
    async fn update_field(
        &self,
        product_id: &str,
        change: &FieldChange,
    ) -> Result<UpdateOutcome, ResourceError> {
        match change {
            FieldChange::Quantity {
                quantity,
                warehouse_id: Some(warehouse_id),
            } => {
                self.update_warehouse_inventory(product_id, warehouse_id, *quantity)
                    .await
            }
            other => self.update(product_id, &ProductUpdate::from(other)).await,
        }
    }
}

/// Reads the saved product and any `_syncWarning` from a write response.
///
/// The product is either the body itself or nested under `product`; the
/// warning may sit on the envelope or on the product.
fn outcome_from_response(id: &str, response: &HttpResponse) -> Result<UpdateOutcome, ResourceError> {
    let body = &response.body;

    let product_value = match body.get("product") {
        Some(value) if value.is_object() => Some(value),
        _ if body.get("id").is_some() => Some(body),
        _ => None,
    };

    let sync_warning = sync_warning(body).or_else(|| product_value.and_then(sync_warning));

    let product = product_value
        .map(|value| serde_json::from_value::<Product>(value.clone()))
        .transpose()
        .map_err(|source| ResourceError::Deserialize {
            resource: RESOURCE,
            source,
        })?;

    if let Some(warning) = &sync_warning {
        tracing::warn!(product_id = id, "product saved with sync warning: {warning}");
    }

    Ok(UpdateOutcome {
        product,
        sync_warning,
    })
}

fn sync_warning(value: &serde_json::Value) -> Option<String> {
    match value.get("_syncWarning")? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Object(map) => map
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(ToString::to_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn response(body: serde_json::Value) -> HttpResponse {
        HttpResponse::new(200, HashMap::new(), body)
    }

    #[test]
    fn test_outcome_from_bare_product() {
        let outcome =
            outcome_from_response("p-1", &response(json!({"id": "p-1", "price": 35.5}))).unwrap();
        assert_eq!(outcome.product.map(|p| p.price), Some(35.5));
        assert!(outcome.sync_warning.is_none());
    }

    #[test]
    fn test_outcome_reads_envelope_warning() {
        let outcome = outcome_from_response(
            "p-1",
            &response(json!({
                "product": {"id": "p-1", "sku": "TSH-002"},
                "_syncWarning": "Saved locally but Shopify update failed"
            })),
        )
        .unwrap();
        assert_eq!(outcome.product.map(|p| p.sku), Some("TSH-002".to_string()));
        assert_eq!(
            outcome.sync_warning.as_deref(),
            Some("Saved locally but Shopify update failed")
        );
    }

    #[test]
    fn test_outcome_reads_warning_on_product() {
        let outcome = outcome_from_response(
            "p-1",
            &response(json!({"id": "p-1", "_syncWarning": {"message": "WooCommerce offline"}})),
        )
        .unwrap();
        assert!(outcome.product.is_some());
        assert_eq!(outcome.sync_warning.as_deref(), Some("WooCommerce offline"));
    }

    #[test]
    fn test_outcome_without_product() {
        let outcome = outcome_from_response("p-1", &response(json!({"success": true}))).unwrap();
        assert_eq!(outcome, UpdateOutcome::default());
    }

    #[test]
    fn test_import_summary_defaults() {
        let summary: ImportSummary =
            serde_json::from_value(json!({"created": 3, "updated": 2})).unwrap();
        assert_eq!(summary.imported, 3);
        assert_eq!(summary.total(), 5);
        assert!(summary.errors.is_empty());
    }
}
