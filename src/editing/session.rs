//! The set of inline editors open on the product list.

use std::collections::HashMap;

use crate::editing::controller::InlineEditor;
use crate::editing::field::EditableField;
use crate::models::Product;

/// Inline editors keyed by product id and field.
///
/// Editors on different rows are independent. A field of a row has at most
/// one editor, so beginning an edit on a cell that is already being edited
/// returns the existing editor untouched.
#[derive(Debug, Default)]
pub struct InlineEditSession {
    editors: HashMap<(String, EditableField), InlineEditor>,
    warehouse_id: Option<String>,
}

impl InlineEditSession {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scopes quantity edits begun from now on to a warehouse (the active
    /// warehouse filter). Edits already open keep their warehouse.
    pub fn set_warehouse(&mut self, warehouse_id: Option<String>) {
        self.warehouse_id = warehouse_id;
    }

    /// Opens (or returns the open) editor for a cell.
    pub fn begin(&mut self, product: &Product, field: EditableField) -> &mut InlineEditor {
        let warehouse_id = match field {
            EditableField::Quantity => self.warehouse_id.clone(),
            _ => None,
        };
        let editor = self
            .editors
            .entry((product.id.clone(), field))
            .or_insert_with(|| InlineEditor::new(&product.id, field));
        editor.set_warehouse(warehouse_id);
        editor.begin(product);
        editor
    }

    /// The editor for a cell, if one is open.
    #[must_use]
    pub fn editor(&self, product_id: &str, field: EditableField) -> Option<&InlineEditor> {
        self.editors.get(&(product_id.to_string(), field))
    }

    /// Mutable access to the editor for a cell.
    pub fn editor_mut(&mut self, product_id: &str, field: EditableField) -> Option<&mut InlineEditor> {
        self.editors.get_mut(&(product_id.to_string(), field))
    }

    /// Returns `true` if the cell has an active editor.
    #[must_use]
    pub fn is_editing(&self, product_id: &str, field: EditableField) -> bool {
        self.editor(product_id, field)
            .is_some_and(InlineEditor::is_active)
    }

    /// Number of active editors.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.editors.values().filter(|e| e.is_active()).count()
    }

    /// Drops editors that are back in the viewing state.
    pub fn prune(&mut self) {
        self.editors.retain(|_, editor| editor.is_active());
    }

    /// Closes every editor of a product, e.g. after it was deleted.
    pub fn close_product(&mut self, product_id: &str) {
        self.editors.retain(|(id, _), _| id != product_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::controller::EditKey;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            sku: format!("SKU-{id}"),
            stock_quantity: 5,
            ..Default::default()
        }
    }

    #[test]
    fn test_one_editor_per_cell() {
        let mut session = InlineEditSession::new();
        let p1 = product("p-1");

        session.begin(&p1, EditableField::Sku).input("CHANGED");
        let editor = session.begin(&p1, EditableField::Sku);

        assert_eq!(editor.buffer(), Some("CHANGED"));
        assert_eq!(session.active_count(), 1);
    }

    #[test]
    fn test_rows_are_independent() {
        let mut session = InlineEditSession::new();
        let p1 = product("p-1");
        let p2 = product("p-2");

        session.begin(&p1, EditableField::Sku);
        session.begin(&p2, EditableField::Sku);
        session.begin(&p1, EditableField::Price);

        session
            .editor_mut("p-2", EditableField::Sku)
            .unwrap()
            .key(EditKey::Escape);

        assert!(session.is_editing("p-1", EditableField::Sku));
        assert!(!session.is_editing("p-2", EditableField::Sku));
        assert_eq!(session.active_count(), 2);

        session.prune();
        assert!(session.editor("p-2", EditableField::Sku).is_none());
    }

    #[test]
    fn test_quantity_editor_uses_session_warehouse() {
        let mut session = InlineEditSession::new();
        session.set_warehouse(Some("w-1".to_string()));

        let p1 = product("p-1");
        assert_eq!(session.begin(&p1, EditableField::Quantity).warehouse_id(), Some("w-1"));
        assert_eq!(session.begin(&p1, EditableField::Price).warehouse_id(), None);
    }

    #[test]
    fn test_reopened_quantity_editor_follows_warehouse_switch() {
        let mut session = InlineEditSession::new();
        let p1 = product("p-1");

        session.set_warehouse(Some("w1".to_string()));
        session.begin(&p1, EditableField::Quantity).cancel();

        session.set_warehouse(Some("w2".to_string()));
        let editor = session.begin(&p1, EditableField::Quantity);
        assert_eq!(editor.warehouse_id(), Some("w2"));

        session.set_warehouse(None);
        let still_open = session.begin(&p1, EditableField::Quantity);
        assert_eq!(still_open.warehouse_id(), Some("w2"));
    }

    #[test]
    fn test_close_product() {
        let mut session = InlineEditSession::new();
        session.begin(&product("p-1"), EditableField::Sku);
        session.begin(&product("p-1"), EditableField::Name);
        session.begin(&product("p-2"), EditableField::Name);

        session.close_product("p-1");

        assert_eq!(session.active_count(), 1);
    }
}
