// Pedantic lint configuration for the crate.
// - cast_precision_loss: quantities stay far below 2^52
// - missing_errors_doc: every error is an InventoryError with a readable message
// - module_name_repetitions: `InventoryStore` in `store` reads fine
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod operations;
pub mod store;
