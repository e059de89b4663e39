//! Remote storage seam of the preference store.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{PreferencesPatch, ProductPreferences};
use crate::resources::ResourceError;

/// Error raised by a [`PreferencesBackend`].
///
/// The store logs these and carries on; they never reach the list view.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// The preferences endpoint failed.
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// The backend could not be reached or refused to store the document.
    #[error("Preferences backend unavailable: {0}")]
    Unavailable(String),
}

/// Remote owner of a user's product list preferences.
///
/// Implemented by [`PreferencesApi`](crate::resources::PreferencesApi) over
/// REST and by in-memory fakes in tests.
#[async_trait]
pub trait PreferencesBackend: Send + Sync {
    /// Loads the saved preferences; `Ok(None)` when the user has none.
    async fn fetch(&self) -> Result<Option<ProductPreferences>, PreferencesError>;

    /// Replaces the whole saved document.
    async fn save(&self, preferences: &ProductPreferences) -> Result<(), PreferencesError>;

    /// Replaces only the sections present in `patch`.
    async fn patch(&self, patch: &PreferencesPatch) -> Result<(), PreferencesError>;

    /// Deletes the saved document so the user falls back to defaults.
    async fn reset(&self) -> Result<(), PreferencesError>;
}
