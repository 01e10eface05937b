//! Operator credential check.

pub mod credentials;
pub mod hasher;

pub use credentials::{Operator, StoredHash};
pub use hasher::{hash_password, legacy_hash};
