//! Order placement (the entry aggregator)
//!
//! Find-or-create of the table's open tab. The append path is guarded by
//! the tab revision; the create path is guarded by the unique open-tab
//! index. Either way a lost race re-reads and retries.

use chrono::Utc;
use rust_decimal::Decimal;

use super::MAX_WRITE_RETRIES;
use super::entry::{OrderedItemInput, build_entry};
use crate::db::models::TableTab;
use crate::db::repository::{RepoError, TabRepository};
use crate::utils::{AppError, AppResult};

/// Append a submission to the table's open tab, opening one if needed
pub async fn place_order(
    repo: &TabRepository,
    table_number: &str,
    items: Vec<OrderedItemInput>,
    total_price: Decimal,
) -> AppResult<()> {
    for attempt in 0..MAX_WRITE_RETRIES {
        match repo.find_open_by_table(table_number).await? {
            Some(mut tab) => {
                tab.entries
                    .push(build_entry(items.clone(), total_price, Utc::now()));
                if repo.save_with_revision(&tab).await?.is_some() {
                    return Ok(());
                }
                // Lost the revision race; re-read and retry
                tracing::debug!(table = table_number, attempt, "tab write conflict, retrying");
            }
            None => {
                let entry = build_entry(items.clone(), total_price, Utc::now());
                let tab = TableTab::open(table_number.to_string(), entry);
                match repo.create(tab).await {
                    Ok(_) => return Ok(()),
                    // A concurrent creator beat us to the unique open-tab
                    // index; re-read and append instead
                    Err(RepoError::Duplicate(_)) => {
                        tracing::debug!(table = table_number, attempt, "tab create conflict, retrying");
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
    }

    Err(AppError::conflict("Concurrent order update, please retry"))
}
