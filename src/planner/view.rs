//! Table projection of the editor state.
//!
//! `TableView` holds nothing the editor does not know about: every row can be
//! rebuilt from `EditorState` alone.

use super::editor::{EditorState, Row, RowKey};

pub const TABLE_HEADERS: [&str; 4] = ["", "Item", "To Pack", ""];

/// Smallest re-render that reflects a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderPatch {
    None,
    /// Counter text and completeness of one row changed
    UpdateRow(RowKey),
    RemoveRow(RowKey),
    Rebuild,
}

/// One table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub key: RowKey,
    pub label: String,
    /// "packed / toPack"
    pub ratio: String,
    pub complete: bool,
}

impl RowView {
    fn project(row: &Row) -> Self {
        Self {
            key: row.key.clone(),
            label: row.item.item.clone(),
            ratio: row.item.ratio(),
            complete: row.item.is_complete(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    pub rows: Vec<RowView>,
}

/// Full projection of the editor state
pub fn render_table(state: &EditorState) -> TableView {
    TableView {
        rows: state.rows().iter().map(RowView::project).collect(),
    }
}

impl TableView {
    /// Apply the minimal update for `patch`, reading from `state`
    pub fn apply(&mut self, patch: &RenderPatch, state: &EditorState) {
        match patch {
            RenderPatch::None => {}
            RenderPatch::UpdateRow(key) => {
                let index = self.rows.iter().position(|r| &r.key == key);
                match (index, state.row(key)) {
                    (Some(i), Some(row)) => self.rows[i] = RowView::project(row),
                    // Out of step with the editor; start over.
                    _ => *self = render_table(state),
                }
            }
            RenderPatch::RemoveRow(key) => self.rows.retain(|r| &r.key != key),
            RenderPatch::Rebuild => *self = render_table(state),
        }
    }
}
