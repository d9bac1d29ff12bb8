//! Table Tab Model (订单聚合)
//!
//! One open tab per table, stored as a single nested document:
//! the tab owns an ordered list of entries (one per submission), each
//! entry owns an ordered list of individually-tracked items.
//!
//! The legacy storage called the entry list `orders`; the wire field
//! name is kept for client compatibility.

use super::serde_helpers;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use surrealdb::RecordId;

/// Status lifecycle of a single ordered item
///
/// No enforced transition graph: any status may move to any other,
/// including backwards and into `Cancelled`. Unrecognized status strings
/// are rejected at the API boundary (see [`ItemStatus::from_str`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Pending,
    Preparing,
    Served,
    Cancelled,
}

impl ItemStatus {
    /// Pending and preparing items count towards the kitchen queue
    pub fn is_active(&self) -> bool {
        matches!(self, ItemStatus::Pending | ItemStatus::Preparing)
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ItemStatus::Pending => "pending",
            ItemStatus::Preparing => "preparing",
            ItemStatus::Served => "served",
            ItemStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

impl FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ItemStatus::Pending),
            "preparing" => Ok(ItemStatus::Preparing),
            "served" => Ok(ItemStatus::Served),
            "cancelled" => Ok(ItemStatus::Cancelled),
            other => Err(format!("Unknown item status: {other}")),
        }
    }
}

/// Tab lifecycle status
///
/// No exposed operation transitions a tab to `Closed`; tabs are
/// effectively append-only. The variant exists so stored documents
/// stay forward-compatible if settlement ever lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabStatus {
    Open,
    Closed,
}

/// A single ordered item, copied from menu data at order time
///
/// `id` is generated when the entry is built and is globally unique;
/// it is *not* the menu item id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderedItem {
    pub id: String,
    pub name: String,
    pub item_price: Decimal,
    pub status: ItemStatus,
    #[serde(default = "default_category")]
    pub category: String,
}

pub fn default_category() -> String {
    "other".to_string()
}

/// One timestamped submission of items placed together
///
/// `price` is the caller-provided submission total. It is trusted as-is,
/// never recomputed from the items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderEntry {
    pub timestamp: DateTime<Utc>,
    pub items: Vec<OrderedItem>,
    pub price: Decimal,
}

/// The per-table order aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableTab {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub table_number: String,
    /// Chronological entries; legacy wire name "orders"
    #[serde(rename = "orders")]
    pub entries: Vec<OrderEntry>,
    pub status: TabStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Optimistic-concurrency counter; bumped on every persisted write
    #[serde(default)]
    pub revision: i64,
}

impl TableTab {
    /// Open a new tab for a table with its first entry
    pub fn open(table_number: String, first_entry: OrderEntry) -> Self {
        let now = first_entry.timestamp;
        Self {
            id: None,
            table_number,
            entries: vec![first_entry],
            status: TabStatus::Open,
            created_at: now,
            updated_at: now,
            revision: 0,
        }
    }

    /// Iterate every item across all entries, in traversal order
    pub fn items(&self) -> impl Iterator<Item = &OrderedItem> {
        self.entries.iter().flat_map(|e| e.items.iter())
    }

    /// Mutable variant of [`items`](Self::items)
    pub fn items_mut(&mut self) -> impl Iterator<Item = &mut OrderedItem> {
        self.entries.iter_mut().flat_map(|e| e.items.iter_mut())
    }

    /// Sum of all entry prices (the running total shown on summaries)
    pub fn total_price(&self) -> Decimal {
        self.entries.iter().map(|e| e.price).sum()
    }
}
