//! 订单核心 - 点餐聚合、读投影、状态流转
//!
//! The structurally interesting part of the system: order submissions
//! accumulate into one open tab per table ([`place`]), staff read views are
//! derived from the nested tab structure ([`projection`]), and individual
//! items move through their status lifecycle ([`transition`]).
//!
//! All mutation paths share the same persistence discipline: read the tab,
//! mutate in memory, write back conditionally on the tab's revision.

pub mod entry;
pub mod place;
pub mod projection;
pub mod transition;


pub use entry::{OrderedItemInput, build_entry};
pub use place::place_order;
pub use projection::{
    MergedItem, OrderHistory, PendingItem, TableSummary, collect_pending_items, group_by_table,
    has_active_items, merged_summary, order_history,
};
pub use transition::{ItemSelector, apply_transition, update_item_status};

/// Bounded retries for revision-guarded writes before giving up with 409
pub(crate) const MAX_WRITE_RETRIES: usize = 3;
