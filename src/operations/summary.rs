use serde::Serialize;

use crate::error::Result;
use crate::operations::views::{low_stock_of, total_value_of};
use crate::store::InventoryStore;

/// Headline numbers for the whole inventory.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub products: usize,
    pub total_value: f64,
    pub low_stock: usize,
}

/// Compute all headline numbers from one snapshot.
pub fn get_summary(store: &InventoryStore, threshold: u64) -> Result<Summary> {
    let inventory = store.load_all()?;
    Ok(Summary {
        products: inventory.len(),
        total_value: total_value_of(&inventory),
        low_stock: low_stock_of(&inventory, threshold).len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::products::add_product;
    use tempfile::TempDir;

    #[test]
    fn summary_empty() {
        let tmp = TempDir::new().unwrap();
        let store = InventoryStore::open(tmp.path().join("inventory.json"));
        let s = get_summary(&store, 5).unwrap();
        assert_eq!(s.products, 0);
        assert_eq!(s.low_stock, 0);
        assert!(s.total_value.abs() < 1e-9);
    }

    #[test]
    fn summary_counts() {
        let tmp = TempDir::new().unwrap();
        let store = InventoryStore::open(tmp.path().join("inventory.json"));
        add_product(&store, "Widget", "Hardware", 10, 2.5).unwrap();
        add_product(&store, "Gizmo", "Hardware", 2, 4.0).unwrap();
        let s = get_summary(&store, 5).unwrap();
        assert_eq!(s.products, 2);
        assert_eq!(s.low_stock, 1);
        assert!((s.total_value - 33.0).abs() < 1e-9);
    }
}
