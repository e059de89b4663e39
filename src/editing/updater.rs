//! The save callback used by inline editors.

use async_trait::async_trait;

use crate::models::{FieldChange, UpdateOutcome};
use crate::resources::ResourceError;

/// Persists a single field edit.
///
/// [`ProductsApi`](crate::resources::ProductsApi) is the production
/// implementation. Hosts that want a read-only table pass no updater and
/// edits are discarded.
#[async_trait]
pub trait ProductUpdater: Send + Sync {
    /// Saves `change` for the product `product_id`.
    async fn update_field(
        &self,
        product_id: &str,
        change: &FieldChange,
    ) -> Result<UpdateOutcome, ResourceError>;
}
