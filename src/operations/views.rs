//! Read-only projections over a fresh inventory snapshot.
//!
//! Each `*_of` function works on an already-loaded [`Inventory`]; the store
//! variants load one first.

use crate::error::Result;
use crate::models::{round2, Inventory, ProductView};
use crate::store::InventoryStore;

#[must_use]
pub fn list_of(inventory: &Inventory) -> Vec<ProductView> {
    inventory
        .iter()
        .map(|(id, product)| ProductView::new(*id, product))
        .collect()
}

#[must_use]
pub fn search_by_name_of(inventory: &Inventory, term: &str) -> Vec<ProductView> {
    let term = term.trim().to_lowercase();
    list_of(inventory)
        .into_iter()
        .filter(|p| p.name.to_lowercase().contains(&term))
        .collect()
}

#[must_use]
pub fn filter_by_category_of(inventory: &Inventory, category: &str) -> Vec<ProductView> {
    let category = category.trim().to_lowercase();
    list_of(inventory)
        .into_iter()
        .filter(|p| p.category.to_lowercase() == category)
        .collect()
}

#[must_use]
pub fn low_stock_of(inventory: &Inventory, threshold: u64) -> Vec<ProductView> {
    list_of(inventory)
        .into_iter()
        .filter(|p| p.quantity < threshold)
        .collect()
}

/// Sum of `quantity * price`, rounded once at the end.
#[must_use]
pub fn total_value_of(inventory: &Inventory) -> f64 {
    round2(inventory.values().map(|p| p.raw_value()).sum())
}

/// Every product with its derived value and status, by ascending ID.
pub fn list_all(store: &InventoryStore) -> Result<Vec<ProductView>> {
    Ok(list_of(&store.load_all()?))
}

/// Case-insensitive substring match on the product name.
pub fn search_by_name(store: &InventoryStore, term: &str) -> Result<Vec<ProductView>> {
    Ok(search_by_name_of(&store.load_all()?, term))
}

/// Case-insensitive exact match on the category.
pub fn filter_by_category(store: &InventoryStore, category: &str) -> Result<Vec<ProductView>> {
    Ok(filter_by_category_of(&store.load_all()?, category))
}

/// Products with `quantity < threshold`.
pub fn low_stock(store: &InventoryStore, threshold: u64) -> Result<Vec<ProductView>> {
    Ok(low_stock_of(&store.load_all()?, threshold))
}

pub fn total_value(store: &InventoryStore) -> Result<f64> {
    Ok(total_value_of(&store.load_all()?))
}
