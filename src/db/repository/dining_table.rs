//! Dining Table Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{DiningTable, TableStatus};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "dining_table";

#[derive(Clone)]
pub struct DiningTableRepository {
    base: BaseRepository,
}

impl DiningTableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all tables ordered by number
    pub async fn find_all(&self) -> RepoResult<Vec<DiningTable>> {
        let tables: Vec<DiningTable> = self
            .base
            .db()
            .query("SELECT * FROM dining_table ORDER BY number")
            .await?
            .take(0)?;
        Ok(tables)
    }

    /// Find a table by its diner-facing number
    pub async fn find_by_number(&self, number: &str) -> RepoResult<Option<DiningTable>> {
        let number_owned = number.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM dining_table WHERE number = $number LIMIT 1")
            .bind(("number", number_owned))
            .await?;
        let tables: Vec<DiningTable> = result.take(0)?;
        Ok(tables.into_iter().next())
    }

    /// Register a new table; fails on duplicate number
    pub async fn create(&self, number: String) -> RepoResult<DiningTable> {
        if self.find_by_number(&number).await?.is_some() {
            return Err(RepoError::Duplicate("Table already exists.".to_string()));
        }

        let table = DiningTable::new(number);
        let created: Option<DiningTable> = self.base.db().create(TABLE).content(table).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create table".to_string()))
    }

    /// Mark a table active (QR scan check on a previously inactive table)
    pub async fn activate(&self, number: &str) -> RepoResult<DiningTable> {
        let number_owned = number.to_string();
        let mut result = self
            .base
            .db()
            .query("UPDATE dining_table SET status = $status WHERE number = $number RETURN AFTER")
            .bind(("status", TableStatus::Active))
            .bind(("number", number_owned))
            .await?;
        let tables: Vec<DiningTable> = result.take(0)?;
        tables
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound("Table not found".to_string()))
    }
}
