//! Reconciles a saved column layout with the current default schema.

use std::collections::HashSet;

use crate::models::ProductColumnConfig;

/// Merges a saved column list onto the default schema by column id.
///
/// Saved columns keep their position and `visible` flag but take `field`,
/// `label` and `sortable` from the matching default. Saved ids that no longer
/// exist in the defaults are dropped, duplicates keep their first occurrence,
/// and default columns missing from the saved list are appended in schema
/// order with their default visibility.
#[must_use]
pub fn merge_columns(
    saved: &[ProductColumnConfig],
    defaults: &[ProductColumnConfig],
) -> Vec<ProductColumnConfig> {
    let mut seen = HashSet::new();
    let mut merged = Vec::with_capacity(defaults.len());

    for column in saved {
        let Some(default) = defaults.iter().find(|d| d.id == column.id) else {
            tracing::debug!(column = %column.id, "dropping saved column missing from schema");
            continue;
        };
        if !seen.insert(default.id.as_str()) {
            continue;
        }
        merged.push(ProductColumnConfig {
            visible: column.visible,
            ..default.clone()
        });
    }

    for default in defaults {
        if seen.insert(default.id.as_str()) {
            tracing::debug!(column = %default.id, "appending new default column");
            merged.push(default.clone());
        }
    }

    merged
}
