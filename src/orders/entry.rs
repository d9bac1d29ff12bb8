//! Order entry construction
//!
//! Turns an incoming submission into a timestamped [`OrderEntry`]. Each
//! item becomes an owned copy of the menu data with a freshly generated
//! id — never a live reference back to the menu.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::db::models::tab::{ItemStatus, OrderEntry, OrderedItem, default_category};

/// One item of an incoming order submission
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderedItemInput {
    pub name: String,
    pub item_price: Decimal,
    /// Defaults to pending when absent
    pub status: Option<ItemStatus>,
    /// Defaults to "other" when absent
    pub category: Option<String>,
}

/// Build an entry from submitted items
///
/// `total_price` is the caller's submission total and is stored as-is;
/// the system deliberately does not recompute it from the items.
pub fn build_entry(
    items: Vec<OrderedItemInput>,
    total_price: Decimal,
    timestamp: DateTime<Utc>,
) -> OrderEntry {
    let items = items
        .into_iter()
        .map(|input| OrderedItem {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            item_price: input.item_price,
            status: input.status.unwrap_or(ItemStatus::Pending),
            category: input.category.unwrap_or_else(default_category),
        })
        .collect();

    OrderEntry {
        timestamp,
        items,
        price: total_price,
    }
}
