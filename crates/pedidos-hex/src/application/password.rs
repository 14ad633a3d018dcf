//! Salted password hashing on argon2. Each call to [`hash_password`] draws a
//! fresh salt, so equal inputs produce distinct PHC strings that both verify.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| anyhow::anyhow!("password hash failed: {e}"))
}

/// False on a wrong password and on a malformed stored hash; never errors.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = hash_password("s3nha-forte").unwrap();
        assert!(verify_password("s3nha-forte", &hash));
        assert!(!verify_password("s3nha-errada", &hash));
    }

    #[test]
    fn same_password_hashes_differently() {
        let a = hash_password("repetida").unwrap();
        let b = hash_password("repetida").unwrap();
        assert_ne!(a, b);
        assert!(verify_password("repetida", &a));
        assert!(verify_password("repetida", &b));
    }

    #[test]
    fn malformed_hash_verifies_false() {
        assert!(!verify_password("qualquer", "not-a-phc-string"));
        assert!(!verify_password("qualquer", ""));
    }
}
