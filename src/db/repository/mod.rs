//! Repository Module
//!
//! Per-entity CRUD over the embedded SurrealDB store.
//!
//! ID 约定: 全栈统一使用 "table:id" 字符串格式，解析为
//! `surrealdb::RecordId` 后再访问数据库。

pub mod category;
pub mod dining_table;
pub mod menu_item;
pub mod tab;

pub use category::CategoryRepository;
pub use dining_table::DiningTableRepository;
pub use menu_item::MenuItemRepository;
pub use tab::TabRepository;

use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            // 遗留契约: 重复资源返回 400 而非 409
            RepoError::Duplicate(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Parse "table:id" or a bare key into a [`RecordId`] for `table`
///
/// Returns `None` when the string carries a different table prefix or
/// fails to parse.
pub fn parse_record_id(table: &str, id: &str) -> Option<surrealdb::RecordId> {
    if id.contains(':') {
        let record_id: surrealdb::RecordId = id.parse().ok()?;
        (record_id.table() == table).then_some(record_id)
    } else {
        Some(surrealdb::RecordId::from_table_key(table, id))
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
