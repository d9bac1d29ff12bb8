//! Menu Item Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "menu_item";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all menu items
    pub async fn find_all(&self) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self.base.db().select(TABLE).await?;
        Ok(items)
    }

    /// Find menu items currently marked available
    pub async fn find_available(&self) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE availability = true")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find menu item by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        let record_id = parse_id(id)?;
        let item: Option<MenuItem> = self.base.db().select(record_id).await?;
        Ok(item)
    }

    /// Create a new menu item
    pub async fn create(&self, data: MenuItemCreate) -> RepoResult<MenuItem> {
        let item = MenuItem {
            id: None,
            name: data.name,
            category: data.category,
            availability: data.availability,
            description: data.description,
            price: data.price,
            image: data.image,
            jain_available: data.jain_available,
        };

        let created: Option<MenuItem> = self.base.db().create(TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    /// Merge-update a menu item
    pub async fn update(&self, id: &str, data: MenuItemUpdate) -> RepoResult<MenuItem> {
        let record_id = parse_id(id)?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound("Item not found".to_string()))?;

        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", record_id))
            .bind(("data", data))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound("Item not found".to_string()))
    }

    /// Flip only the availability flag
    pub async fn set_availability(&self, id: &str, availability: bool) -> RepoResult<MenuItem> {
        self.update(
            id,
            MenuItemUpdate {
                availability: Some(availability),
                name: None,
                category: None,
                description: None,
                price: None,
                image: None,
                jain_available: None,
            },
        )
        .await
    }

    /// Hard delete; returns false when the id does not exist
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let record_id = parse_id(id)?;
        let deleted: Option<MenuItem> = self.base.db().delete(record_id).await?;
        Ok(deleted.is_some())
    }
}

fn parse_id(id: &str) -> RepoResult<surrealdb::RecordId> {
    parse_record_id(TABLE, id).ok_or_else(|| RepoError::NotFound("Item not found".to_string()))
}
