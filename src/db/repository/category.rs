//! Category Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{Category, CategoryCreate, CategoryUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "category";

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all categories ordered by sort_order
    pub async fn find_all(&self) -> RepoResult<Vec<Category>> {
        let categories: Vec<Category> = self
            .base
            .db()
            .query("SELECT * FROM category ORDER BY sortOrder")
            .await?
            .take(0)?;
        Ok(categories)
    }

    /// Find category by id ("category:xxx" or bare key)
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Category>> {
        let record_id = parse_id(id)?;
        let category: Option<Category> = self.base.db().select(record_id).await?;
        Ok(category)
    }

    /// Find category by unique name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Category>> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM category WHERE name = $name LIMIT 1")
            .bind(("name", name_owned))
            .await?;
        let categories: Vec<Category> = result.take(0)?;
        Ok(categories.into_iter().next())
    }

    /// Create a new category; fails on duplicate name
    pub async fn create(&self, data: CategoryCreate) -> RepoResult<Category> {
        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate("Category already exists".to_string()));
        }

        let category = Category {
            id: None,
            display_name: data.display_name.unwrap_or_else(|| data.name.clone()),
            name: data.name,
            icon: data.icon,
            is_visible: data.is_visible.unwrap_or(true),
            sort_order: data.sort_order.unwrap_or(0),
        };

        let created: Option<Category> = self.base.db().create(TABLE).content(category).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create category".to_string()))
    }

    /// Merge-update a category
    pub async fn update(&self, id: &str, data: CategoryUpdate) -> RepoResult<Category> {
        let record_id = parse_id(id)?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound("Category not found".to_string()))?;

        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", record_id))
            .bind(("data", data))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound("Category not found".to_string()))
    }

    /// Hard delete; returns false when the id does not exist
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let record_id = parse_id(id)?;
        let deleted: Option<Category> = self.base.db().delete(record_id).await?;
        Ok(deleted.is_some())
    }
}

fn parse_id(id: &str) -> RepoResult<surrealdb::RecordId> {
    parse_record_id(TABLE, id).ok_or_else(|| RepoError::NotFound("Category not found".to_string()))
}
