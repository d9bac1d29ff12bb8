//! Database Models

// Serde helpers
pub mod serde_helpers;

// Catalog
pub mod category;
pub mod menu_item;

// Location
pub mod dining_table;

// Orders
pub mod tab;

// Re-exports
pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use dining_table::{DiningTable, TableStatus};
pub use menu_item::{MenuItem, MenuItemCreate, MenuItemUpdate};
pub use tab::{ItemStatus, OrderEntry, OrderedItem, TabStatus, TableTab};
