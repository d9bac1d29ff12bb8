//! Orders API Handlers

use std::collections::BTreeMap;
use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::core::ServerState;
use crate::db::models::{ItemStatus, TableTab};
use crate::db::repository::TabRepository;
use crate::orders::{
    ItemSelector, OrderedItemInput, PendingItem, TableSummary, collect_pending_items,
    group_by_table, merged_summary, order_history, place_order, update_item_status,
};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    #[serde(default)]
    pub table_number: Option<String>,
    /// Raw JSON; array-ness is checked in the handler so a malformed
    /// order yields the legacy 400, not an extractor 422
    #[serde(default)]
    pub order: Option<Value>,
    #[serde(default)]
    pub total_price: Option<Decimal>,
}

/// POST /api/orders/place - 下单
///
/// 新订单并入该桌台的 open tab；没有则新开一个。
/// totalPrice 为 0 时按缺失处理拒绝 (遗留的 truthy 检查边界，保留)。
pub async fn place(
    State(state): State<ServerState>,
    Json(payload): Json<PlaceOrderRequest>,
) -> AppResult<Json<Value>> {
    let table_number = payload.table_number.filter(|n| !n.is_empty());
    let (Some(table_number), Some(order), Some(total_price)) =
        (table_number, payload.order, payload.total_price)
    else {
        return Err(AppError::validation("Missing or invalid data."));
    };

    if !order.is_array() {
        return Err(AppError::validation("Missing or invalid data."));
    }
    let order: Vec<OrderedItemInput> = serde_json::from_value(order)
        .map_err(|_| AppError::validation("Missing or invalid data."))?;

    if order.is_empty() || total_price.is_zero() {
        return Err(AppError::validation("Missing or invalid data."));
    }

    let repo = TabRepository::new(state.db.clone());
    place_order(&repo, &table_number, order, total_price).await?;

    Ok(Json(json!({ "message": "Order stored successfully" })))
}

/// GET /api/orders/all - 所有 tab (最近更新在前)
pub async fn list_all(State(state): State<ServerState>) -> AppResult<Json<Vec<TableTab>>> {
    let repo = TabRepository::new(state.db.clone());
    let tabs = repo.find_all().await?;
    Ok(Json(tabs))
}

/// GET /api/orders/items/:table_number - 按菜名合并的桌台汇总
pub async fn table_summary(
    State(state): State<ServerState>,
    Path(table_number): Path<String>,
) -> AppResult<Json<TableSummary>> {
    let repo = TabRepository::new(state.db.clone());
    let tab = repo
        .find_by_table(&table_number)
        .await?
        .ok_or_else(|| AppError::not_found("No orders found for this table"))?;

    Ok(Json(merged_summary(&tab)))
}

#[derive(Debug, Deserialize)]
pub struct CategoryFilter {
    pub category: Option<String>,
}

/// GET /api/orders/by-table - 厨房队列
///
/// 含有 pending/preparing 菜品的 tab，按桌号分组 (返回整个 tab 文档)。
/// 可选 category 过滤只影响 tab 是否入选，不影响返回单位；
/// 空字符串视为未过滤 (遗留行为)。
pub async fn kitchen_queue(
    State(state): State<ServerState>,
    Query(filter): Query<CategoryFilter>,
) -> AppResult<Json<BTreeMap<String, Vec<TableTab>>>> {
    let category = filter.category.filter(|c| !c.is_empty());
    let repo = TabRepository::new(state.db.clone());
    let tabs = repo.find_all().await?;
    Ok(Json(group_by_table(tabs, category.as_deref())))
}

/// GET /api/orders/details/:table_number - 完整点餐历史
pub async fn table_details(
    State(state): State<ServerState>,
    Path(table_number): Path<String>,
) -> AppResult<Json<crate::orders::OrderHistory>> {
    let repo = TabRepository::new(state.db.clone());
    let tab = repo
        .find_by_table(&table_number)
        .await?
        .ok_or_else(|| AppError::not_found("No orders found for this table"))?;

    Ok(Json(order_history(&tab)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    /// 按生成 id 定位单个菜品
    #[serde(default)]
    pub item_id: Option<String>,
    /// 按桌号 + 菜名批量定位 (需同时提供 itemName)
    #[serde(default)]
    pub table_number: Option<String>,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub new_status: Option<String>,
}

/// PATCH /api/orders/update-status - 菜品状态流转
///
/// 两种寻址方式共用同一操作：itemId 精确更新一个菜品；
/// tableNumber + itemName 批量更新该桌 open tab 中所有同名菜品。
/// 非法状态字符串拒绝为 400 (收紧遗留的自由文本行为)。
pub async fn update_status(
    State(state): State<ServerState>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<Json<Value>> {
    let new_status = payload
        .new_status
        .ok_or_else(|| AppError::validation("Missing fields."))?;
    let new_status = ItemStatus::from_str(&new_status).map_err(AppError::Validation)?;

    let selector = match (payload.item_id, payload.table_number, payload.item_name) {
        (Some(item_id), _, _) => ItemSelector::ById(item_id),
        (None, Some(table_number), Some(name)) => ItemSelector::ByName { table_number, name },
        _ => return Err(AppError::validation("Missing fields.")),
    };

    let repo = TabRepository::new(state.db.clone());
    update_item_status(&repo, &selector, new_status).await?;

    Ok(Json(json!({ "message": "Item status updated." })))
}

/// GET /api/orders/pending-preparing-items - 扁平的待做/在做菜品列表
///
/// 按存储遍历顺序 (tab -> entry -> item)，不排序；
/// category 过滤为大小写敏感的精确匹配，空字符串视为未过滤。
pub async fn pending_items(
    State(state): State<ServerState>,
    Query(filter): Query<CategoryFilter>,
) -> AppResult<Json<Vec<PendingItem>>> {
    let category = filter.category.filter(|c| !c.is_empty());
    let repo = TabRepository::new(state.db.clone());
    let tabs = repo.find_all_unsorted().await?;
    Ok(Json(collect_pending_items(&tabs, category.as_deref())))
}
