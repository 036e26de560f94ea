//! List Editor State
//!
//! The in-memory copy of the list being edited. Mutations are local; the
//! store only sees the list when it is saved as a whole.

use std::fmt;

use thiserror::Error;

use crate::api::{ApiResult, PackingApi};
use crate::models::{PackItem, PackList};

/// Identifies a row of the editor.
///
/// Persisted items are keyed by their store id. Items added in this session
/// have no store id yet and get a local counter instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowKey {
    Stored(String),
    Local(u32),
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Stored(id) => write!(f, "{}", id),
            RowKey::Local(n) => write!(f, "local-{}", n),
        }
    }
}

/// Local mutation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("item {0} not found")]
    ItemNotFound(RowKey),
    #[error("item label must not be empty")]
    EmptyLabel,
}

/// One item plus the key the UI addresses it by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: RowKey,
    pub item: PackItem,
}

/// What `quick_add` did to the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickAdd {
    /// Existing rows with the label had `toPack` raised by one
    Incremented(usize),
    /// A new unsaved row was appended
    Appended(RowKey),
}

/// Single source of truth for the list currently open in the planner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    id: String,
    name: String,
    rows: Vec<Row>,
    next_local: u32,
}

impl EditorState {
    /// Build editor state from a fetched list
    pub fn from_list(list: PackList) -> Self {
        let mut state = Self {
            id: list.id,
            name: list.name,
            rows: Vec::with_capacity(list.items.len()),
            next_local: 0,
        };
        for item in list.items {
            let key = match &item.id {
                Some(id) => RowKey::Stored(id.clone()),
                None => state.next_local_key(),
            };
            state.rows.push(Row { key, item });
        }
        state
    }

    /// Fetch a list and build its state.
    ///
    /// Nothing is handed to the caller until the fetch has succeeded, so the
    /// caller can swap the result in with a single assignment.
    pub async fn load<A: PackingApi + ?Sized>(api: &A, id: &str) -> ApiResult<Self> {
        let list = api.fetch_by_id(id).await?;
        log::info!("[PLANNER] Loaded list {} with {} items", list.id, list.items.len());
        Ok(Self::from_list(list))
    }

    /// Re-fetch this list, replacing local state only on success
    pub async fn reload<A: PackingApi + ?Sized>(&mut self, api: &A) -> ApiResult<()> {
        let fresh = Self::load(api, &self.id).await?;
        *self = fresh;
        Ok(())
    }

    /// Swap in `fresh` unless this state moved on from `sent` in the
    /// meantime. Returns whether `fresh` was installed.
    pub fn replace_if_unchanged(&mut self, sent: &EditorState, fresh: EditorState) -> bool {
        if self != sent {
            log::info!("[PLANNER] Edited during reload of {}; keeping local state", self.id);
            return false;
        }
        *self = fresh;
        true
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, key: &RowKey) -> Option<&Row> {
        self.rows.iter().find(|r| &r.key == key)
    }

    fn next_local_key(&mut self) -> RowKey {
        self.next_local += 1;
        RowKey::Local(self.next_local)
    }

    /// Advance the packed counter through its cycle:
    /// counting up, complete at `toPack`, then back to zero.
    pub fn toggle_check(&mut self, key: &RowKey) -> Result<&PackItem, EditorError> {
        let row = self
            .rows
            .iter_mut()
            .find(|r| &r.key == key)
            .ok_or_else(|| EditorError::ItemNotFound(key.clone()))?;
        let item = &mut row.item;

        // Counts come off the wire; test for the reset before adding.
        if item.packed >= item.to_pack {
            item.packed = 0;
        } else {
            item.packed = item.packed.saturating_add(1);
        }
        log::debug!("[PLANNER] {} -> {}", key, item.ratio());
        Ok(&row.item)
    }

    /// Remove a row; absent keys are ignored
    pub fn delete_item(&mut self, key: &RowKey) -> Option<PackItem> {
        let index = self.rows.iter().position(|r| &r.key == key)?;
        Some(self.rows.remove(index).item)
    }

    /// Raise `toPack` of every row labelled `label`, or append a new row.
    ///
    /// The caller is expected to save right after this.
    pub fn quick_add(&mut self, label: &str) -> QuickAdd {
        let mut matched = 0;
        for row in self.rows.iter_mut().filter(|r| r.item.item == label) {
            row.item.to_pack = row.item.to_pack.saturating_add(1);
            matched += 1;
        }
        if matched > 0 {
            return QuickAdd::Incremented(matched);
        }

        let key = self.next_local_key();
        self.rows.push(Row {
            key: key.clone(),
            item: PackItem::unsaved(label, 1),
        });
        QuickAdd::Appended(key)
    }

    /// Append an unsaved row from the new-entry form
    pub fn add_entry(&mut self, label: &str, to_pack: u32) -> Result<RowKey, EditorError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(EditorError::EmptyLabel);
        }
        let key = self.next_local_key();
        self.rows.push(Row {
            key: key.clone(),
            item: PackItem::unsaved(label, to_pack.max(1)),
        });
        Ok(key)
    }

    /// Wire form of the current state
    pub fn to_pack_list(&self) -> PackList {
        PackList {
            id: self.id.clone(),
            name: self.name.clone(),
            items: self.rows.iter().map(|r| r.item.clone()).collect(),
        }
    }

    /// Push the whole list to the store. No retry; local state is untouched.
    pub async fn save<A: PackingApi + ?Sized>(&self, api: &A) -> ApiResult<()> {
        let list = self.to_pack_list();
        match api.replace_by_id(&self.id, &list).await {
            Ok(()) => {
                log::info!("[PLANNER] Saved list {}", self.id);
                Ok(())
            }
            Err(e) => {
                log::warn!("[PLANNER] Save of {} failed: {}", self.id, e);
                Err(e)
            }
        }
    }
}
