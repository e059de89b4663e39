//! Inline editing of product list cells.
//!
//! Each editable cell (SKU, name, price, quantity) runs a small state
//! machine, [`InlineEditor`]: viewing, editing, saving, then back to viewing
//! on success or to editing with the backend message on failure. Input is
//! validated before anything is sent.
//!
//! - [`EditableField`]: Which cell, and how its buffer is parsed
//! - [`InlineEditor`]: The state machine
//! - [`InlineEditSession`]: All open editors, one per product and field
//! - [`ProductUpdater`]: The save callback, implemented by
//!   [`ProductsApi`](crate::resources::ProductsApi)
//!
//! Saves are sent once with no timeout. Escape during a save only changes
//! the local state; the request still completes on the backend.

mod controller;
mod errors;
mod field;
mod session;
mod updater;

pub use controller::{
    EditAction, EditKey, EditState, InlineEditor, PendingSave, SaveTicket, SavedEdit,
};
pub use errors::{EditError, ValidationError};
pub use field::EditableField;
pub use session::InlineEditSession;
pub use updater::ProductUpdater;
