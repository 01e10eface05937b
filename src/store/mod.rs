pub mod file;
pub mod validate;

pub use file::{CorruptionPolicy, InventoryStore};
