use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use sha2::{Digest, Sha256};

use crate::error::{InventoryError, Result};

/// Salt baked into the legacy password scheme. Shared by every installation.
const LEGACY_SALT: &str = "inventory_salt_2025";

/// Hash a password with Argon2id and a fresh random salt (PHC string).
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InventoryError::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Check a password against an Argon2 PHC string. Malformed hashes never match.
#[must_use]
pub fn verify_argon2(password: &str, phc: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(phc) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Legacy `sha256(password || salt)` digest, lowercase hex.
#[must_use]
pub fn legacy_hash(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(LEGACY_SALT.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_hash_known_vector() {
        assert_eq!(
            legacy_hash("PASSWORD"),
            "a78e697d806d6bec41cd83c3b7b114eb2ba02ec6b7434fe27694e5c8cb92d30f"
        );
        assert_eq!(legacy_hash("PASSWORD").len(), 64);
    }

    #[test]
    fn argon2_salts_differ() {
        let h1 = hash_password("hunter2").unwrap();
        let h2 = hash_password("hunter2").unwrap();
        assert_ne!(h1, h2);
        assert!(h1.starts_with("$argon2id$"));
        assert!(verify_argon2("hunter2", &h1));
        assert!(verify_argon2("hunter2", &h2));
        assert!(!verify_argon2("hunter3", &h1));
    }

    #[test]
    fn malformed_phc_never_matches() {
        assert!(!verify_argon2("x", "$argon2id$garbage"));
    }
}
