use chrono::Local;
use serde::Serialize;

use crate::error::{InventoryError, Result};
use crate::models::{Product, DATE_FORMAT};
use crate::store::validate::{
    check_price, check_quantity, parse_price, parse_quantity, require_text,
};
use crate::store::InventoryStore;

#[derive(Debug, Clone, Serialize)]
pub struct AddResult {
    pub id: u64,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteResult {
    pub id: u64,
    pub name: String,
    pub message: String,
}

/// Add a product, assigning `max(id) + 1` (or 1 for an empty inventory).
pub fn add_product(
    store: &InventoryStore,
    name: &str,
    category: &str,
    quantity: i64,
    price: f64,
) -> Result<AddResult> {
    let name = require_text(name, "Product name cannot be empty")?;
    let category = require_text(category, "Category cannot be empty")?;
    let quantity = check_quantity(quantity)?;
    let price = check_price(price)?;

    let id = store.update(|inventory| {
        let id = match inventory.keys().next_back() {
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| InventoryError::validation("No product IDs left to assign"))?,
            None => 1,
        };
        inventory.insert(
            id,
            Product {
                name: name.clone(),
                category,
                quantity,
                price,
                date_added: Local::now().format(DATE_FORMAT).to_string(),
            },
        );
        Ok(id)
    })?;

    tracing::info!(id, name = %name, "product added");
    Ok(AddResult {
        id,
        message: format!("Product '{name}' added successfully with ID {id}"),
    })
}

/// [`add_product`] for raw text input, validated field by field in form
/// order: name, category, quantity, price.
pub fn add_product_input(
    store: &InventoryStore,
    name: &str,
    category: &str,
    quantity: &str,
    price: &str,
) -> Result<AddResult> {
    require_text(name, "Product name cannot be empty")?;
    require_text(category, "Category cannot be empty")?;
    let quantity = parse_quantity(quantity)?;
    check_quantity(quantity)?;
    let price = parse_price(price)?;
    add_product(store, name, category, quantity, price)
}

/// Remove a product, returning its name.
pub fn delete_product(store: &InventoryStore, id: u64) -> Result<DeleteResult> {
    let product = store.update(|inventory| {
        inventory
            .remove(&id)
            .ok_or(InventoryError::NotFound { id })
    })?;

    tracing::info!(id, name = %product.name, "product deleted");
    Ok(DeleteResult {
        id,
        message: format!("Product '{}' deleted successfully", product.name),
        name: product.name,
    })
}
