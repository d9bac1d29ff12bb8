//! Read projections over stored tabs
//!
//! Three groupings over the same nested structure:
//!
//! - per-table merged summary (group items by name, keep every status);
//! - kitchen queue (whole tab documents grouped by table, qualified by
//!   having at least one pending/preparing item);
//! - flat pending/preparing item list in traversal order.
//!
//! Plus the full chronological history per table. Category filters are
//! exact, case-sensitive string matches.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::db::models::{ItemStatus, TableTab};

/// Merged view of all occurrences of one item name
#[derive(Debug, Serialize)]
pub struct MergedItem {
    pub quantity: u32,
    /// Per-occurrence statuses, deliberately not collapsed
    pub statuses: Vec<ItemStatus>,
}

/// Per-table merged summary (`GET /api/orders/items/{tableNumber}`)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSummary {
    pub items: BTreeMap<String, MergedItem>,
    pub total_price: Decimal,
}

/// Flatten all entries' items and group by item name
pub fn merged_summary(tab: &TableTab) -> TableSummary {
    let mut items: BTreeMap<String, MergedItem> = BTreeMap::new();
    for item in tab.items() {
        let merged = items.entry(item.name.clone()).or_insert(MergedItem {
            quantity: 0,
            statuses: Vec::new(),
        });
        merged.quantity += 1;
        merged.statuses.push(item.status);
    }

    TableSummary {
        items,
        total_price: tab.total_price(),
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryItem {
    pub name: String,
    /// Always 1: items are stored individually, never quantity-aggregated
    pub quantity: u32,
    pub status: ItemStatus,
}

#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub items: Vec<HistoryItem>,
    pub price: Decimal,
}

/// Full chronological history (`GET /api/orders/details/{tableNumber}`)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistory {
    pub orders: Vec<HistoryEntry>,
    pub total_price: Decimal,
}

pub fn order_history(tab: &TableTab) -> OrderHistory {
    let orders = tab
        .entries
        .iter()
        .map(|entry| HistoryEntry {
            timestamp: entry.timestamp,
            items: entry
                .items
                .iter()
                .map(|item| HistoryItem {
                    name: item.name.clone(),
                    quantity: 1,
                    status: item.status,
                })
                .collect(),
            price: entry.price,
        })
        .collect();

    OrderHistory {
        orders,
        total_price: tab.total_price(),
    }
}

/// Does this tab qualify for the kitchen queue?
///
/// True when any item is pending/preparing; a category filter narrows
/// which items count, but never what is returned (the whole tab).
pub fn has_active_items(tab: &TableTab, category: Option<&str>) -> bool {
    tab.items()
        .any(|item| item.status.is_active() && category.is_none_or(|c| item.category == c))
}

/// Kitchen queue (`GET /api/orders/by-table`): qualifying tab documents
/// grouped by table number, preserving the incoming tab order per table
pub fn group_by_table(
    tabs: Vec<TableTab>,
    category: Option<&str>,
) -> BTreeMap<String, Vec<TableTab>> {
    let mut grouped: BTreeMap<String, Vec<TableTab>> = BTreeMap::new();
    for tab in tabs {
        if has_active_items(&tab, category) {
            grouped.entry(tab.table_number.clone()).or_default().push(tab);
        }
    }
    grouped
}

/// One record of the flat pending/preparing list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub status: ItemStatus,
    pub category: String,
    pub table_number: String,
    /// Timestamp of the entry the item belongs to
    pub order_timestamp: DateTime<Utc>,
}

/// Flat pending/preparing item list in tab -> entry -> item traversal
/// order; no explicit sort
pub fn collect_pending_items(tabs: &[TableTab], category: Option<&str>) -> Vec<PendingItem> {
    let mut out = Vec::new();
    for tab in tabs {
        for entry in &tab.entries {
            for item in &entry.items {
                if item.status.is_active() && category.is_none_or(|c| item.category == c) {
                    out.push(PendingItem {
                        id: item.id.clone(),
                        name: item.name.clone(),
                        status: item.status,
                        category: item.category.clone(),
                        table_number: tab.table_number.clone(),
                        order_timestamp: entry.timestamp,
                    });
                }
            }
        }
    }
    out
}
