//! Column and preference store for the product list.
//!
//! - [`PreferenceStore`]: Local cache of a user's layout, written through to a backend
//! - [`PreferencesBackend`]: The remote storage seam
//! - [`merge_columns`]: Reconciles a saved layout with the default column schema
//!
//! Preferences are non-critical. Load failures fall back to the default
//! schema and write failures are only logged.

mod backend;
mod merge;
mod store;

pub use backend::{PreferencesBackend, PreferencesError};
pub use merge::merge_columns;
pub use store::PreferenceStore;
