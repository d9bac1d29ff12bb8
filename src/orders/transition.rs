//! Item status transitions
//!
//! One operation, two addressing policies behind a selector: a single
//! item anywhere by generated id, or every same-named item within one
//! table's open tab. Both share the load-apply-save cycle here.

use super::MAX_WRITE_RETRIES;
use crate::db::models::{ItemStatus, TableTab};
use crate::db::repository::TabRepository;
use crate::utils::{AppError, AppResult};

/// How a transition addresses its target items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSelector {
    /// Exactly one item by its generated id, regardless of table
    ById(String),
    /// Every item with this exact name in the table's open tab
    ByName { table_number: String, name: String },
}

/// Apply a transition to a loaded tab; returns the number of items changed
///
/// By id the item is set unconditionally (re-applying the same status is a
/// success). By name only items whose status actually differs count as
/// changed — re-applying the current status to a whole table is reported
/// as "nothing matched", matching the legacy boundary.
pub fn apply_transition(
    tab: &mut TableTab,
    selector: &ItemSelector,
    new_status: ItemStatus,
) -> usize {
    match selector {
        ItemSelector::ById(id) => {
            for item in tab.items_mut() {
                if item.id == *id {
                    item.status = new_status;
                    return 1;
                }
            }
            0
        }
        ItemSelector::ByName { name, .. } => {
            let mut changed = 0;
            for item in tab.items_mut() {
                if item.name == *name && item.status != new_status {
                    item.status = new_status;
                    changed += 1;
                }
            }
            changed
        }
    }
}

/// Load the addressed tab, apply the transition, persist with the
/// revision guard
pub async fn update_item_status(
    repo: &TabRepository,
    selector: &ItemSelector,
    new_status: ItemStatus,
) -> AppResult<()> {
    for attempt in 0..MAX_WRITE_RETRIES {
        let mut tab = match selector {
            ItemSelector::ById(id) => repo
                .find_by_item_id(id)
                .await?
                .ok_or_else(|| AppError::not_found("Item not found."))?,
            ItemSelector::ByName { table_number, .. } => repo
                .find_open_by_table(table_number)
                .await?
                .ok_or_else(|| AppError::not_found("No orders found for this table"))?,
        };

        let changed = apply_transition(&mut tab, selector, new_status);
        if changed == 0 {
            return Err(match selector {
                ItemSelector::ById(_) => AppError::not_found("Item not found for update."),
                ItemSelector::ByName { .. } => AppError::validation("No matching items"),
            });
        }

        if repo.save_with_revision(&tab).await?.is_some() {
            return Ok(());
        }
        tracing::debug!(attempt, "status write conflict, retrying");
    }

    Err(AppError::conflict("Concurrent order update, please retry"))
}
