//! Pack List Repository
//!
//! SQLite-backed document store: one row per list, items as a JSON column.
//! Every write replaces the whole document.

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

use super::db::DbConn;
use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, PackList, PackListSummary};

/// SQLite implementation of the pack list repository
pub struct PackListRepository {
    conn: DbConn,
}

impl PackListRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    /// Totals per list for the overview page
    pub async fn summaries(&self) -> DomainResult<Vec<PackListSummary>> {
        Ok(self.list().await?.iter().map(PackList::summary).collect())
    }

    pub async fn count(&self) -> DomainResult<usize> {
        let conn = self.conn.lock().await;
        let n: i64 = conn.query_row("SELECT COUNT(*) FROM pack_lists", [], |row| row.get(0))?;
        Ok(n as usize)
    }
}

/// Raw columns; items are decoded after the row callback so JSON errors
/// surface as domain errors
fn read_row(row: &Row<'_>) -> rusqlite::Result<(String, String, String)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

fn decode((id, name, items): (String, String, String)) -> DomainResult<PackList> {
    Ok(PackList {
        id,
        name,
        items: serde_json::from_str(&items)?,
    })
}

#[async_trait]
impl Repository<PackList> for PackListRepository {
    async fn create(&self, entity: &PackList) -> DomainResult<PackList> {
        let mut list = entity.clone();
        if list.id.is_empty() {
            list.id = Uuid::new_v4().to_string();
        }
        list.assign_item_ids();
        let items = serde_json::to_string(&list.items)?;
        let now = Utc::now().timestamp_millis();

        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO pack_lists (id, name, items, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4)",
            params![list.id, list.name, items, now],
        )?;
        tracing::debug!(id = %list.id, items = list.items.len(), "created pack list");
        Ok(list)
    }

    async fn find_by_id(&self, id: &String) -> DomainResult<Option<PackList>> {
        let conn = self.conn.lock().await;
        let raw = conn
            .query_row(
                "SELECT id, name, items FROM pack_lists WHERE id = ?1",
                params![id],
                read_row,
            )
            .optional()?;
        raw.map(decode).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<PackList>> {
        let conn = self.conn.lock().await;
        let mut stmt =
            conn.prepare("SELECT id, name, items FROM pack_lists ORDER BY created_at ASC, rowid ASC")?;
        let raws = stmt
            .query_map([], read_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        raws.into_iter().map(decode).collect()
    }

    async fn update(&self, entity: &PackList) -> DomainResult<PackList> {
        let mut list = entity.clone();
        list.assign_item_ids();
        let items = serde_json::to_string(&list.items)?;
        let now = Utc::now().timestamp_millis();

        let conn = self.conn.lock().await;
        let changed = conn.execute(
            "UPDATE pack_lists SET name = ?2, items = ?3, updated_at = ?4 WHERE id = ?1",
            params![list.id, list.name, items, now],
        )?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("pack list {}", list.id)));
        }
        tracing::debug!(id = %list.id, items = list.items.len(), "replaced pack list");
        Ok(list)
    }

    async fn delete(&self, id: &String) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        let changed = conn.execute("DELETE FROM pack_lists WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("pack list {}", id)));
        }
        Ok(())
    }
}
