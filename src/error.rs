use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("{0}")]
    Validation(String),

    #[error("Product with ID {id} does not exist")]
    NotFound { id: u64 },

    #[error("Not enough stock to decrease. Current: {current}, Requested: {requested}")]
    InsufficientStock { current: u64, requested: u64 },

    #[error("inventory file {path} is unreadable: {detail}")]
    StorageCorruption { path: String, detail: String },

    #[error("Please enter both username and password")]
    MissingCredentials,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("no operator credential configured: set auth.username and auth.password_hash, or INVTRACK_ADMIN and INVTRACK_ADMIN_PASSWORD")]
    NoOperator,

    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl InventoryError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(
            InventoryError::NotFound { id: 7 }.to_string(),
            "Product with ID 7 does not exist"
        );
        assert_eq!(
            InventoryError::InsufficientStock {
                current: 10,
                requested: 12
            }
            .to_string(),
            "Not enough stock to decrease. Current: 10, Requested: 12"
        );
        assert_eq!(
            InventoryError::validation("Category cannot be empty").to_string(),
            "Category cannot be empty"
        );
    }
}
