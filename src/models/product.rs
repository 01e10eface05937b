use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Quantity below which a product is flagged as low stock.
pub const LOW_STOCK_THRESHOLD: u64 = 5;

/// Timestamp layout used for `date_added`.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The full product collection, keyed by ID.
///
/// Serialized as a JSON object with stringified integer keys. The ordered map
/// keeps listings in ascending ID order no matter how the file orders its keys.
pub type Inventory = BTreeMap<u64, Product>;

/// A product record as persisted in the inventory file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub quantity: u64,
    pub price: f64,
    /// Creation timestamp (`YYYY-MM-DD HH:MM:SS`), never rewritten.
    pub date_added: String,
}

impl Product {
    /// Stock value, rounded to cents.
    #[must_use]
    pub fn value(&self) -> f64 {
        round2(self.raw_value())
    }

    /// Unrounded `quantity * price`, used for aggregation.
    #[must_use]
    pub fn raw_value(&self) -> f64 {
        self.quantity as f64 * self.price
    }

    #[must_use]
    pub fn status(&self) -> StockStatus {
        if self.quantity < LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InStock => f.write_str("In Stock"),
            Self::LowStock => f.write_str("Low Stock"),
        }
    }
}

/// A product together with its derived fields, as shown in listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub quantity: u64,
    pub price: f64,
    pub value: f64,
    pub date_added: String,
    pub status: StockStatus,
}

impl ProductView {
    #[must_use]
    pub fn new(id: u64, product: &Product) -> Self {
        Self {
            id,
            name: product.name.clone(),
            category: product.category.clone(),
            quantity: product.quantity,
            price: product.price,
            value: product.value(),
            date_added: product.date_added.clone(),
            status: product.status(),
        }
    }
}

/// Round to two decimal places.
///
/// Works on the exact binary value of `x` and breaks ties to even, so 1.115
/// (stored as 1.11499...) gives 1.11 and 0.125 gives 0.12. Values outside
/// `Decimal`'s range are returned unchanged.
#[must_use]
pub fn round2(x: f64) -> f64 {
    Decimal::from_f64_retain(x)
        .and_then(|d| d.round_dp(2).to_f64())
        .unwrap_or(x)
}
