//! Table Tab Repository
//!
//! Tabs are stored one document per table: the full entry/item nesting is
//! written as a unit. Read-modify-write cycles are guarded by the tab's
//! `revision` counter — [`save_with_revision`](TabRepository::save_with_revision)
//! only lands when the stored revision still matches the one that was read,
//! so concurrent appenders cannot silently overwrite each other.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{OrderEntry, TableTab};
use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "table_order";

#[derive(Clone)]
pub struct TabRepository {
    base: BaseRepository,
}

impl TabRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All tabs, newest-updated first
    pub async fn find_all(&self) -> RepoResult<Vec<TableTab>> {
        let tabs: Vec<TableTab> = self
            .base
            .db()
            .query("SELECT * FROM table_order ORDER BY updatedAt DESC")
            .await?
            .take(0)?;
        Ok(tabs)
    }

    /// All tabs in storage order (flat item projections; no sort)
    pub async fn find_all_unsorted(&self) -> RepoResult<Vec<TableTab>> {
        let tabs: Vec<TableTab> = self.base.db().select(TABLE).await?;
        Ok(tabs)
    }

    /// The open tab for a table, if any
    pub async fn find_open_by_table(&self, table_number: &str) -> RepoResult<Option<TableTab>> {
        let number = table_number.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM table_order WHERE tableNumber = $number AND status = 'open' LIMIT 1")
            .bind(("number", number))
            .await?;
        let tabs: Vec<TableTab> = result.take(0)?;
        Ok(tabs.into_iter().next())
    }

    /// Any tab for a table regardless of status (read projections)
    pub async fn find_by_table(&self, table_number: &str) -> RepoResult<Option<TableTab>> {
        let number = table_number.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM table_order WHERE tableNumber = $number LIMIT 1")
            .bind(("number", number))
            .await?;
        let tabs: Vec<TableTab> = result.take(0)?;
        Ok(tabs.into_iter().next())
    }

    /// Locate the tab containing an ordered item by its generated id
    ///
    /// Item ids are uuids, unique across all tabs; the scan walks the
    /// nested structure in storage order.
    pub async fn find_by_item_id(&self, item_id: &str) -> RepoResult<Option<TableTab>> {
        let tabs = self.find_all().await?;
        Ok(tabs
            .into_iter()
            .find(|tab| tab.items().any(|item| item.id == item_id)))
    }

    /// Persist a brand-new tab
    ///
    /// A violation of the unique open-tab index surfaces as
    /// [`RepoError::Duplicate`] so callers can tell a lost create race
    /// apart from a genuine store failure.
    pub async fn create(&self, tab: TableTab) -> RepoResult<TableTab> {
        let created: Option<TableTab> = self
            .base
            .db()
            .create(TABLE)
            .content(tab)
            .await
            .map_err(|e| {
                let msg = e.to_string();
                if msg.contains("uniq_open_tab") {
                    RepoError::Duplicate("Open tab already exists".to_string())
                } else {
                    RepoError::Database(msg)
                }
            })?;
        created.ok_or_else(|| RepoError::Database("Failed to create tab".to_string()))
    }

    /// Conditional write: persist the tab's entries only if the stored
    /// revision still equals `tab.revision`
    ///
    /// Returns `None` when another writer got there first; the caller
    /// re-reads and retries.
    pub async fn save_with_revision(&self, tab: &TableTab) -> RepoResult<Option<TableTab>> {
        let id = tab
            .id
            .clone()
            .ok_or_else(|| RepoError::Database("Cannot save tab without id".to_string()))?;

        let entries: Vec<OrderEntry> = tab.entries.clone();
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE $tab SET orders = $entries, updatedAt = $updated_at, \
                 revision = revision + 1 WHERE revision = $revision RETURN AFTER",
            )
            .bind(("tab", id))
            .bind(("entries", entries))
            .bind(("updated_at", Utc::now()))
            .bind(("revision", tab.revision))
            .await?;

        let updated: Vec<TableTab> = result.take(0)?;
        Ok(updated.into_iter().next())
    }
}
