//! Dining Table Model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Table lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    Active,
    Inactive,
}

/// Dining table entity (桌台)
///
/// `number` is the diner-facing identifier printed on the QR code.
/// Tables are never deleted; an inactive table flips back to active
/// on its first successful scan check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub number: String,
    pub status: TableStatus,
    pub created_at: DateTime<Utc>,
}

impl DiningTable {
    pub fn new(number: String) -> Self {
        Self {
            id: None,
            number,
            status: TableStatus::Active,
            created_at: Utc::now(),
        }
    }
}
