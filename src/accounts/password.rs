use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

/// How a submitted password compares with the `senha` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Verified,
    Mismatch,
    /// The column does not hold a PHC string argon2 can read, e.g. a legacy
    /// SHA-256 hex digest.
    Unreadable,
}

/// Salts and hashes a credential for the `senha` column.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|phc| phc.to_string())
        .map_err(|e| anyhow::anyhow!("argon2 hashing failed: {e}"))
}

pub fn verify_password(plain: &str, stored: &str) -> Verification {
    let Ok(phc) = PasswordHash::new(stored) else {
        return Verification::Unreadable;
    };
    match Argon2::default().verify_password(plain.as_bytes(), &phc) {
        Ok(()) => Verification::Verified,
        Err(_) => Verification::Mismatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_hash_accepts_only_its_own_password() {
        let stored = hash_password("senha-do-paciente").unwrap();
        assert_eq!(verify_password("senha-do-paciente", &stored), Verification::Verified);
        assert_eq!(verify_password("Senha-do-paciente", &stored), Verification::Mismatch);
        assert_eq!(verify_password("", &stored), Verification::Mismatch);
    }

    #[test]
    fn whitespace_password_is_hashed_like_any_other() {
        let stored = hash_password("   ").unwrap();
        assert_eq!(verify_password("   ", &stored), Verification::Verified);
        assert_eq!(verify_password("  ", &stored), Verification::Mismatch);
    }

    #[test]
    fn each_hash_carries_its_own_salt() {
        let first = hash_password("mesma-senha").unwrap();
        let second = hash_password("mesma-senha").unwrap();
        assert!(first.starts_with("$argon2id$"));
        assert_ne!(first, second);
        assert!(!first.contains("mesma-senha"));
    }

    #[test]
    fn legacy_digest_column_is_unreadable() {
        // sha256("password") as the old scripts stored it
        let legacy = "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8";
        assert_eq!(verify_password("password", legacy), Verification::Unreadable);
        assert_eq!(verify_password("password", ""), Verification::Unreadable);
    }
}
