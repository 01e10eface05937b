pub mod product;

pub use product::{
    round2, Inventory, Product, ProductView, StockStatus, DATE_FORMAT, LOW_STOCK_THRESHOLD,
};
