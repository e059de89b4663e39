//! Client-side cache of a user's product list preferences.

use crate::models::{
    default_columns, PreferencesPatch, ProductColumnConfig, ProductFilterState,
    ProductPreferences, ProductSortState,
};
use crate::preferences::backend::PreferencesBackend;
use crate::preferences::merge::merge_columns;

/// Holds the user's column layout, default sort, default filters and filter
/// panel state, synchronized with a [`PreferencesBackend`].
///
/// Every mutation updates the local copy first and then awaits the persist
/// call. Persist failures are logged with `tracing` and neither rolled back
/// nor returned: the local state stays authoritative for the session.
///
/// # Example
///
/// ```rust,ignore
/// use catalog_ops::{PreferenceStore, PreferencesApi};
///
/// let mut store = PreferenceStore::new(PreferencesApi::new(client));
/// store.load().await;
///
/// store.toggle_column("brand").await;
/// store.set_sort_field("price").await;
/// ```
#[derive(Debug)]
pub struct PreferenceStore<B> {
    backend: B,
    preferences: ProductPreferences,
    initialized: bool,
}

impl<B: PreferencesBackend> PreferenceStore<B> {
    /// Creates a store holding the default preferences.
    ///
    /// Call [`PreferenceStore::load`] to pull the saved document.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            preferences: ProductPreferences::default(),
            initialized: false,
        }
    }

    /// Loads the saved preferences and merges them onto the default schema.
    ///
    /// Any failure falls back to the defaults. The store is initialized
    /// afterwards either way.
    pub async fn load(&mut self) -> &ProductPreferences {
        let defaults = ProductPreferences::default();

        self.preferences = match self.backend.fetch().await {
            Ok(Some(saved)) => ProductPreferences {
                columns: merge_columns(&saved.columns, &defaults.columns),
                ..saved
            },
            Ok(None) => {
                tracing::debug!("no saved product preferences, using defaults");
                defaults
            }
            Err(e) => {
                tracing::warn!("failed to load product preferences, using defaults: {e}");
                defaults
            }
        };
        self.initialized = true;

        &self.preferences
    }

    /// Returns `true` once [`PreferenceStore::load`] has completed.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The current preferences.
    #[must_use]
    pub const fn preferences(&self) -> &ProductPreferences {
        &self.preferences
    }

    /// The column layout in display order.
    #[must_use]
    pub fn columns(&self) -> &[ProductColumnConfig] {
        &self.preferences.columns
    }

    /// The visible columns in display order.
    pub fn visible_columns(&self) -> impl Iterator<Item = &ProductColumnConfig> {
        self.preferences.columns.iter().filter(|c| c.visible)
    }

    /// The default sort.
    #[must_use]
    pub const fn sort(&self) -> &ProductSortState {
        &self.preferences.sort_config
    }

    /// The default filters.
    #[must_use]
    pub const fn filters(&self) -> &ProductFilterState {
        &self.preferences.filters
    }

    /// Whether the filter panel is open.
    #[must_use]
    pub const fn show_filters(&self) -> bool {
        self.preferences.show_filters
    }

    /// Returns the backend.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Replaces the column layout.
    pub async fn set_columns(&mut self, columns: Vec<ProductColumnConfig>) {
        self.preferences.columns = columns;
        self.persist_columns().await;
    }

    /// Shows or hides a column. Unknown ids are ignored.
    pub async fn set_column_visibility(&mut self, column_id: &str, visible: bool) {
        let Some(column) = self
            .preferences
            .columns
            .iter_mut()
            .find(|c| c.id == column_id)
        else {
            tracing::debug!(column = column_id, "ignoring visibility change for unknown column");
            return;
        };
        if column.visible == visible {
            return;
        }
        column.visible = visible;
        self.persist_columns().await;
    }

    /// Flips the visibility of a column. Unknown ids are ignored.
    pub async fn toggle_column(&mut self, column_id: &str) {
        if let Some(visible) = self
            .preferences
            .columns
            .iter()
            .find(|c| c.id == column_id)
            .map(|c| c.visible)
        {
            self.set_column_visibility(column_id, !visible).await;
        }
    }

    /// Moves the column at `from` to index `to`, shifting the others.
    ///
    /// Out-of-range indexes and no-op moves are ignored.
    pub async fn move_column(&mut self, from: usize, to: usize) {
        let columns = &mut self.preferences.columns;
        if from == to || from >= columns.len() || to >= columns.len() {
            return;
        }
        let column = columns.remove(from);
        columns.insert(to, column);
        self.persist_columns().await;
    }

    /// Replaces the default sort.
    pub async fn set_sort(&mut self, sort: ProductSortState) {
        self.preferences.sort_config = sort;
        let patch = PreferencesPatch::sort_config(self.preferences.sort_config.clone());
        self.persist(&patch).await;
    }

    /// Sorts by `field`: the active field flips direction, a new field starts
    /// ascending.
    pub async fn set_sort_field(&mut self, field: &str) {
        let sort = self.preferences.sort_config.clicked(field);
        self.set_sort(sort).await;
    }

    /// Replaces the default filters.
    pub async fn set_filters(&mut self, filters: ProductFilterState) {
        self.preferences.filters = filters;
        let patch = PreferencesPatch::filters(self.preferences.filters.clone());
        self.persist(&patch).await;
    }

    /// Opens or closes the filter panel.
    pub async fn set_show_filters(&mut self, show: bool) {
        self.preferences.show_filters = show;
        self.persist(&PreferencesPatch::show_filters(show)).await;
    }

    /// Writes the whole document to the backend.
    pub async fn save_all(&self) {
        if let Err(e) = self.backend.save(&self.preferences).await {
            tracing::warn!("failed to save product preferences: {e}");
        }
    }

    /// Restores the default schema locally and deletes the saved document.
    pub async fn reset(&mut self) {
        self.preferences = ProductPreferences {
            columns: default_columns(),
            ..ProductPreferences::default()
        };
        if let Err(e) = self.backend.reset().await {
            tracing::warn!("failed to reset product preferences: {e}");
        }
    }

    async fn persist_columns(&self) {
        let patch = PreferencesPatch::columns(self.preferences.columns.clone());
        self.persist(&patch).await;
    }

    async fn persist(&self, patch: &PreferencesPatch) {
        if let Err(e) = self.backend.patch(patch).await {
            tracing::warn!("failed to persist product preferences: {e}");
        }
    }
}
