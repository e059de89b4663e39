//! Per-cell inline edit state machine.

use crate::editing::errors::{EditError, ValidationError};
use crate::editing::field::EditableField;
use crate::editing::updater::ProductUpdater;
use crate::models::{FieldChange, Product, UpdateOutcome};
use crate::resources::ResourceError;

/// State of one inline editor.
///
/// ```text
/// Viewing --begin--> Editing --Enter/blur--> Saving --ok--> Viewing
///    ^                 |  ^                    |
///    +-----Escape------+  +------failed--------+
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum EditState {
    /// Showing the stored value.
    Viewing,
    /// The user is typing. `error` holds the last validation or save message.
    Editing {
        /// Edit buffer.
        buffer: String,
        /// Message to show next to the cell.
        error: Option<String>,
    },
    /// The change has been sent and the editor waits for the backend.
    Saving {
        /// Edit buffer, restored if the save fails.
        buffer: String,
        /// The change in flight.
        change: FieldChange,
        /// Identifies this save among the editor's saves.
        ticket: SaveTicket,
    },
}

/// Identifies one save started by an editor.
///
/// Results are matched to the save they answer, so a late answer to a save
/// abandoned with Escape cannot settle a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SaveTicket(u64);

/// A save that has been started and must be sent to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSave {
    /// Pass back to [`InlineEditor::finish_save`] with the result.
    pub ticket: SaveTicket,
    /// The change to send.
    pub change: FieldChange,
}

/// A keyboard event in an editing cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    /// Commit.
    Enter,
    /// Discard.
    Escape,
}

/// What the host should do after a key or blur event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// Nothing.
    None,
    /// Save the edit (call [`InlineEditor::commit`] or [`InlineEditor::start_save`]).
    Commit,
    /// The edit was discarded.
    Cancelled,
}

/// A successful inline save.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedEdit {
    /// The change that was saved.
    pub change: FieldChange,
    /// What the backend returned.
    pub outcome: UpdateOutcome,
}

/// Inline editor for one field of one product.
///
/// # Example
///
/// ```rust,ignore
/// use catalog_ops::editing::{EditKey, EditAction, EditableField, InlineEditor};
///
/// let mut editor = InlineEditor::new(&product.id, EditableField::Price);
/// editor.begin(&product);
/// editor.input("35.5");
///
/// if editor.key(EditKey::Enter) == EditAction::Commit {
///     match editor.commit(Some(&api)).await {
///         Ok(Some(saved)) => catalog.apply_outcome(&product.id, &saved.change, saved.outcome),
///         Ok(None) => {}
///         Err(e) => show_alert(&e.user_message()),
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InlineEditor {
    product_id: String,
    field: EditableField,
    warehouse_id: Option<String>,
    needs_warehouse: bool,
    saves: u64,
    state: EditState,
}

impl InlineEditor {
    /// Creates an editor in the viewing state.
    #[must_use]
    pub fn new(product_id: impl Into<String>, field: EditableField) -> Self {
        Self {
            product_id: product_id.into(),
            field,
            warehouse_id: None,
            needs_warehouse: false,
            saves: 0,
            state: EditState::Viewing,
        }
    }

    /// Scopes quantity edits to one warehouse.
    #[must_use]
    pub fn with_warehouse(mut self, warehouse_id: Option<String>) -> Self {
        self.warehouse_id = warehouse_id;
        self
    }

    /// Moves quantity edits to another warehouse. Ignored while an edit is
    /// open, so a started edit keeps the warehouse it was begun with.
    pub fn set_warehouse(&mut self, warehouse_id: Option<String>) {
        if !self.is_active() {
            self.warehouse_id = warehouse_id;
        }
    }

    /// The product being edited.
    #[must_use]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// The field being edited.
    #[must_use]
    pub const fn field(&self) -> EditableField {
        self.field
    }

    /// The warehouse quantity edits apply to.
    #[must_use]
    pub fn warehouse_id(&self) -> Option<&str> {
        self.warehouse_id.as_deref()
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> &EditState {
        &self.state
    }

    /// Returns `true` unless the editor is viewing.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self.state, EditState::Viewing)
    }

    /// Returns `true` while a save is in flight.
    #[must_use]
    pub const fn is_saving(&self) -> bool {
        matches!(self.state, EditState::Saving { .. })
    }

    /// The edit buffer, when editing or saving.
    #[must_use]
    pub fn buffer(&self) -> Option<&str> {
        match &self.state {
            EditState::Viewing => None,
            EditState::Editing { buffer, .. } | EditState::Saving { buffer, .. } => Some(buffer),
        }
    }

    /// The message to show next to the cell, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            EditState::Editing { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// Enters editing, seeding the buffer with the product's current value.
    ///
    /// Has no effect unless the editor is viewing. A quantity edit without a
    /// warehouse on a product stocked per warehouse shows the total but
    /// cannot be saved.
    pub fn begin(&mut self, product: &Product) {
        if self.is_active() {
            return;
        }
        self.needs_warehouse = self.field == EditableField::Quantity
            && self.warehouse_id.is_none()
            && product.has_warehouse_breakdown();
        let buffer = self
            .field
            .current_value(product, self.warehouse_id.as_deref());
        self.state = EditState::Editing {
            buffer,
            error: None,
        };
    }

    /// Replaces the edit buffer. Ignored unless editing.
    pub fn input(&mut self, text: &str) {
        if let EditState::Editing { buffer, .. } = &mut self.state {
            text.clone_into(buffer);
        }
    }

    /// Handles Enter or Escape.
    ///
    /// Escape returns to viewing from editing or saving. A save already sent
    /// still completes on the backend; its result is ignored by this editor.
    pub fn key(&mut self, key: EditKey) -> EditAction {
        match (key, &self.state) {
            (EditKey::Enter, EditState::Editing { .. }) => EditAction::Commit,
            (EditKey::Escape, EditState::Editing { .. } | EditState::Saving { .. }) => {
                self.state = EditState::Viewing;
                EditAction::Cancelled
            }
            _ => EditAction::None,
        }
    }

    /// Handles the cell losing focus.
    pub const fn blur(&self) -> EditAction {
        if self.field.commits_on_blur() && matches!(self.state, EditState::Editing { .. }) {
            EditAction::Commit
        } else {
            EditAction::None
        }
    }

    /// Validates the buffer and moves to saving.
    ///
    /// On a validation failure the editor stays in editing with the message
    /// set, and nothing should be sent.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NotEditing`] unless editing, and
    /// [`EditError::Validation`] when the buffer is rejected.
    pub fn start_save(&mut self) -> Result<PendingSave, EditError> {
        let EditState::Editing { buffer, error } = &mut self.state else {
            return Err(EditError::NotEditing);
        };

        let parsed = if self.needs_warehouse {
            Err(ValidationError::WarehouseRequired)
        } else {
            self.field.parse(buffer, self.warehouse_id.as_deref())
        };

        match parsed {
            Ok(change) => {
                self.saves += 1;
                let ticket = SaveTicket(self.saves);
                let buffer = std::mem::take(buffer);
                self.state = EditState::Saving {
                    buffer,
                    change: change.clone(),
                    ticket,
                };
                Ok(PendingSave { ticket, change })
            }
            Err(e) => {
                *error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Records the backend's answer to the save identified by `ticket`.
    ///
    /// Success returns to viewing; failure returns to editing with the
    /// buffer kept and the backend message set. Ignored unless the editor is
    /// still saving under that ticket.
    pub fn finish_save(
        &mut self,
        ticket: SaveTicket,
        result: &Result<UpdateOutcome, ResourceError>,
    ) {
        let buffer = match &mut self.state {
            EditState::Saving {
                buffer,
                ticket: current,
                ..
            } if *current == ticket => buffer,
            _ => {
                tracing::debug!(
                    product_id = %self.product_id,
                    "ignoring result of a save this editor no longer waits for"
                );
                return;
            }
        };

        self.state = match result {
            Ok(_) => EditState::Viewing,
            Err(e) => EditState::Editing {
                buffer: std::mem::take(buffer),
                error: Some(e.user_message()),
            },
        };
    }

    /// Discards the edit and returns to viewing.
    pub fn cancel(&mut self) {
        self.state = EditState::Viewing;
    }

    /// Validates, saves through `updater` and records the result.
    ///
    /// Without an updater the edit is discarded with a warning and
    /// `Ok(None)` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::Validation`] without calling the updater when the
    /// buffer is rejected, and [`EditError::Save`] when the backend fails. In
    /// both cases the editor stays open with the buffer intact.
    pub async fn commit(
        &mut self,
        updater: Option<&dyn ProductUpdater>,
    ) -> Result<Option<SavedEdit>, EditError> {
        let Some(updater) = updater else {
            if self.is_active() {
                tracing::warn!(
                    product_id = %self.product_id,
                    field = ?self.field,
                    "no product updater configured, discarding edit"
                );
            }
            self.cancel();
            return Ok(None);
        };

        let PendingSave { ticket, change } = self.start_save()?;
        let result = updater.update_field(&self.product_id, &change).await;
        self.finish_save(ticket, &result);

        match result {
            Ok(outcome) => Ok(Some(SavedEdit { change, outcome })),
            Err(e) => {
                tracing::warn!(
                    product_id = %self.product_id,
                    field = ?self.field,
                    "inline save failed: {e}"
                );
                Err(e.into())
            }
        }
    }
}
