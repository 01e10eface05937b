use serde::Serialize;

use crate::error::{InventoryError, Result};
use crate::store::validate::{check_amount, check_quantity};
use crate::store::InventoryStore;

#[derive(Debug, Clone, Serialize)]
pub struct QuantityResult {
    pub id: u64,
    pub quantity: u64,
    pub message: String,
}

/// Outcome of an increase or decrease.
#[derive(Debug, Clone, Serialize)]
pub struct StockChange {
    pub id: u64,
    pub old: u64,
    pub new: u64,
    pub message: String,
}

/// Overwrite a product's quantity.
pub fn set_quantity(store: &InventoryStore, id: u64, quantity: i64) -> Result<QuantityResult> {
    let quantity = check_quantity(quantity)?;
    store.update(|inventory| {
        let product = inventory
            .get_mut(&id)
            .ok_or(InventoryError::NotFound { id })?;
        product.quantity = quantity;
        Ok(())
    })?;

    tracing::info!(id, quantity, "quantity set");
    Ok(QuantityResult {
        id,
        quantity,
        message: format!("Product ID {id} quantity updated to {quantity}"),
    })
}

pub fn increase_stock(store: &InventoryStore, id: u64, amount: i64) -> Result<StockChange> {
    let amount = check_amount(amount, "increase")?;
    let (old, new) = store.update(|inventory| {
        let product = inventory
            .get_mut(&id)
            .ok_or(InventoryError::NotFound { id })?;
        let old = product.quantity;
        product.quantity = old
            .checked_add(amount)
            .ok_or_else(|| InventoryError::validation("Amount to increase is too large"))?;
        Ok((old, product.quantity))
    })?;

    tracing::info!(id, old, new, "stock increased");
    Ok(StockChange {
        id,
        old,
        new,
        message: format!("Stock increased. Product ID {id}: {old} → {new}"),
    })
}

/// Decrease stock. Asking for more than is on hand fails and changes nothing.
pub fn decrease_stock(store: &InventoryStore, id: u64, amount: i64) -> Result<StockChange> {
    let amount = check_amount(amount, "decrease")?;
    let (old, new) = store.update(|inventory| {
        let product = inventory
            .get_mut(&id)
            .ok_or(InventoryError::NotFound { id })?;
        let old = product.quantity;
        if amount > old {
            return Err(InventoryError::InsufficientStock {
                current: old,
                requested: amount,
            });
        }
        product.quantity = old - amount;
        Ok((old, product.quantity))
    })?;

    tracing::info!(id, old, new, "stock decreased");
    Ok(StockChange {
        id,
        old,
        new,
        message: format!("Stock decreased. Product ID {id}: {old} → {new}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::products::add_product;
    use crate::operations::views::list_all;
    use tempfile::TempDir;

    fn store_with_widget(quantity: i64) -> (TempDir, InventoryStore) {
        let tmp = TempDir::new().unwrap();
        let store = InventoryStore::open(tmp.path().join("inventory.json"));
        add_product(&store, "Widget", "Hardware", quantity, 2.5).unwrap();
        (tmp, store)
    }

    fn quantity_of(store: &InventoryStore, id: u64) -> u64 {
        list_all(store)
            .unwrap()
            .into_iter()
            .find(|p| p.id == id)
            .unwrap()
            .quantity
    }

    #[test]
    fn set_quantity_overwrites() {
        let (_tmp, store) = store_with_widget(10);
        let res = set_quantity(&store, 1, 0).unwrap();
        assert_eq!(res.message, "Product ID 1 quantity updated to 0");
        assert_eq!(quantity_of(&store, 1), 0);
    }

    #[test]
    fn set_quantity_validates() {
        let (_tmp, store) = store_with_widget(10);
        assert_eq!(
            set_quantity(&store, 1, -1).unwrap_err().to_string(),
            "Quantity cannot be negative"
        );
        assert!(matches!(
            set_quantity(&store, 99, 3),
            Err(InventoryError::NotFound { id: 99 })
        ));
        assert_eq!(quantity_of(&store, 1), 10);
    }

    #[test]
    fn increase_then_decrease_restores() {
        let (_tmp, store) = store_with_widget(7);
        let up = increase_stock(&store, 1, 5).unwrap();
        assert_eq!((up.old, up.new), (7, 12));
        assert_eq!(up.message, "Stock increased. Product ID 1: 7 → 12");
        let down = decrease_stock(&store, 1, 5).unwrap();
        assert_eq!((down.old, down.new), (12, 7));
        assert_eq!(quantity_of(&store, 1), 7);
    }

    #[test]
    fn decrease_never_goes_negative() {
        let (_tmp, store) = store_with_widget(10);
        let err = decrease_stock(&store, 1, 12).unwrap_err();
        assert!(matches!(
            err,
            InventoryError::InsufficientStock {
                current: 10,
                requested: 12
            }
        ));
        assert_eq!(
            err.to_string(),
            "Not enough stock to decrease. Current: 10, Requested: 12"
        );
        assert_eq!(quantity_of(&store, 1), 10);

        let res = decrease_stock(&store, 1, 10).unwrap();
        assert_eq!(res.new, 0);
        assert_eq!(quantity_of(&store, 1), 0);
    }

    #[test]
    fn adjustments_require_positive_amount() {
        let (_tmp, store) = store_with_widget(10);
        assert_eq!(
            increase_stock(&store, 1, 0).unwrap_err().to_string(),
            "Amount to increase must be positive"
        );
        assert_eq!(
            decrease_stock(&store, 1, -3).unwrap_err().to_string(),
            "Amount to decrease must be positive"
        );
    }

    #[test]
    fn adjustments_on_unknown_id() {
        let (_tmp, store) = store_with_widget(10);
        assert!(matches!(
            increase_stock(&store, 2, 1),
            Err(InventoryError::NotFound { id: 2 })
        ));
        assert!(matches!(
            decrease_stock(&store, 2, 1),
            Err(InventoryError::NotFound { id: 2 })
        ));
    }
}
