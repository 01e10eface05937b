use crate::auth::hasher::{hash_password, legacy_hash, verify_argon2};
use crate::error::{InventoryError, Result};

/// A stored password hash in one of the supported schemes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredHash {
    /// Argon2 PHC string (`$argon2id$...`).
    Argon2(String),
    /// 64-hex SHA-256 over the password and a fixed salt. Weak; accepted so
    /// existing deployments keep working.
    LegacySha256(String),
}

impl StoredHash {
    /// Classify a configured hash string.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.starts_with('$') {
            argon2::PasswordHash::new(raw)
                .map_err(|e| InventoryError::Config(format!("invalid password hash: {e}")))?;
            return Ok(Self::Argon2(raw.to_string()));
        }
        if raw.len() == 64 && raw.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(Self::LegacySha256(raw.to_ascii_lowercase()));
        }
        Err(InventoryError::Config(
            "password hash must be an Argon2 PHC string or a 64-digit hex digest".into(),
        ))
    }

    #[must_use]
    pub fn matches(&self, password: &str) -> bool {
        match self {
            Self::Argon2(phc) => verify_argon2(password, phc),
            Self::LegacySha256(hex) => {
                tracing::warn!("verifying against a legacy fixed-salt SHA-256 hash; rehash with `invtrack hash-password`");
                legacy_hash(password) == *hex
            }
        }
    }
}

/// The single configured operator.
#[derive(Debug, Clone)]
pub struct Operator {
    username: String,
    hash: StoredHash,
}

impl Operator {
    pub fn new(username: impl Into<String>, hash: StoredHash) -> Self {
        Self {
            username: username.into(),
            hash,
        }
    }

    /// Build an operator from a plaintext password, hashing it now.
    pub fn from_plaintext(username: impl Into<String>, password: &str) -> Result<Self> {
        Ok(Self::new(username, StoredHash::Argon2(hash_password(password)?)))
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Exact username match plus password check.
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && self.hash.matches(password)
    }

    /// Like [`verify`](Self::verify), but reports why a login was refused.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<()> {
        if username.is_empty() || password.is_empty() {
            return Err(InventoryError::MissingCredentials);
        }
        if !self.verify(username, password) {
            tracing::info!(username, "login refused");
            return Err(InventoryError::InvalidCredentials);
        }
        tracing::debug!(username, "login accepted");
        Ok(())
    }
}
