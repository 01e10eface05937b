//! Inventory operations shared by the CLI and library callers.
//!
//! Mutators validate their input, then run inside a single
//! [`InventoryStore::update`](crate::store::InventoryStore::update) so the
//! file is re-read before and rewritten after every change. Views read a fresh
//! snapshot on every call.

pub mod products;
pub mod stock;
pub mod summary;
pub mod views;

pub use products::{add_product, add_product_input, delete_product, AddResult, DeleteResult};
pub use stock::{decrease_stock, increase_stock, set_quantity, QuantityResult, StockChange};
pub use summary::{get_summary, Summary};
pub use views::{filter_by_category, list_all, low_stock, search_by_name, total_value};
