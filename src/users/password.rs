use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

/// Hashes a plaintext password with Argon2 default parameters and a fresh salt.
/// The PHC string is returned as bytes, which is what the `password` column stores.
pub fn hash_password(plain: &str) -> anyhow::Result<Vec<u8>> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash.into_bytes())
}

pub fn verify_password(plain: &str, hash: &[u8]) -> anyhow::Result<bool> {
    let hash = std::str::from_utf8(hash)?;
    let parsed = PasswordHash::new(hash).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let password = "secret";
        let hash = hash_password(password).expect("hashing should succeed");
        assert!(verify_password(password, &hash).expect("verify should succeed"));
    }

    #[test]
    fn hash_is_salted() {
        let a = hash_password("secret").expect("hashing should succeed");
        let b = hash_password("secret").expect("hashing should succeed");
        assert_ne!(a, b);
        assert_ne!(a, b"secret".to_vec());
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hash = hash_password("correct-horse-battery-staple").expect("hashing should succeed");
        assert!(!verify_password("wrong-password", &hash).expect("verify should not error"));
    }

    #[test]
    fn verify_errors_on_malformed_hash() {
        // raw bytes as written by the update handler are not a hash
        let err = verify_password("anything", b"not-a-valid-hash").unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
