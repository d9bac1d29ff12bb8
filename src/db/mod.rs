//! Database Module
//!
//! 嵌入式 SurrealDB 存储。订单 Tab 以单文档聚合形式存储
//! (tab -> entries -> items 嵌套)，每次写入为一个整体。

pub mod models;
pub mod repository;

use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const NAMESPACE: &str = "thali";
const DATABASE: &str = "main";

/// Uniqueness constraints on the otherwise schemaless tables
///
/// The open-tab index is what makes the aggregator's find-or-create safe
/// against concurrent creators (no tab ever moves to closed, so one row
/// per (tableNumber, status) pair is exactly one open tab per table).
const SCHEMA: &str = "
    DEFINE INDEX IF NOT EXISTS uniq_category_name ON TABLE category FIELDS name UNIQUE;
    DEFINE INDEX IF NOT EXISTS uniq_table_number ON TABLE dining_table FIELDS number UNIQUE;
    DEFINE INDEX IF NOT EXISTS uniq_open_tab ON TABLE table_order FIELDS tableNumber, status UNIQUE;
";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk database at `db_path`
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        init_schema(&db).await?;

        tracing::info!("Database opened at {}", db_path);

        Ok(Self { db })
    }

    /// Open an in-memory database (tests)
    pub async fn open_in_memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        init_schema(&db).await?;

        Ok(Self { db })
    }
}

async fn init_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(SCHEMA)
        .await
        .map_err(|e| AppError::database(format!("Failed to define indexes: {e}")))?;
    Ok(())
}
