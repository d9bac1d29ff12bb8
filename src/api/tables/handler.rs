//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::core::ServerState;
use crate::db::models::{DiningTable, TableStatus};
use crate::db::repository::DiningTableRepository;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct AddTableRequest {
    #[serde(default)]
    pub number: Option<String>,
}

/// POST /api/tables/add - 注册桌台
///
/// 缺少编号或编号重复时返回 400 (遗留契约)
pub async fn add(
    State(state): State<ServerState>,
    Json(payload): Json<AddTableRequest>,
) -> AppResult<Json<Value>> {
    let number = payload
        .number
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::validation("Table number is required."))?;

    let repo = DiningTableRepository::new(state.db.clone());
    let table = repo.create(number).await?;

    Ok(Json(json!({ "message": "Table added", "table": table })))
}

/// GET /api/tables/all - 获取所有桌台 (按编号排序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DiningTable>>> {
    let repo = DiningTableRepository::new(state.db.clone());
    let tables = repo.find_all().await?;
    Ok(Json(tables))
}

/// GET /api/tables/check/:number - 扫码校验桌台
///
/// 未激活的桌台在首次扫码时被激活
pub async fn check(
    State(state): State<ServerState>,
    Path(number): Path<String>,
) -> AppResult<Json<Value>> {
    let repo = DiningTableRepository::new(state.db.clone());
    let table = repo
        .find_by_number(&number)
        .await?
        .ok_or_else(|| AppError::not_found("Table not found"))?;

    let table = if table.status != TableStatus::Active {
        repo.activate(&number).await?
    } else {
        table
    };

    Ok(Json(
        json!({ "message": "Table valid and activated", "table": table }),
    ))
}
