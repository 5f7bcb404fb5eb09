//! Salted password hashing with argon2 (PHC string format).

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::ApiError;

/// Valid argon2id hash of an unguessable throwaway value. Verified against on
/// the unknown-username login path so response timing matches the real path.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$VE0e3g7DalWHgDwou3nuRA$uC6TER156UQpk0lNh5WPUNCxnvOYABGRqbFvtt0XnpA";

/// Hash a plaintext credential with a fresh random salt
pub fn hash_password(plain: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!("Password hashing failed: {}", e);
            ApiError::internal_server_error("Failed to process credential")
        })
}

/// Constant-time verification of a plaintext credential against a stored hash
pub fn verify_password(plain: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        tracing::error!("Stored password hash is not a valid PHC string");
        return false;
    };
    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok()
}

/// Burn a verification when no user row was found, so unknown usernames and
/// wrong passwords are indistinguishable by timing
pub fn dummy_verify(plain: &str) {
    let _ = verify_password(plain, DUMMY_HASH);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_own_input() {
        let hash = hash_password("Pw1!").expect("hash");
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("Pw1!", &hash));
        assert!(!verify_password("pw1!", &hash));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("same-password").expect("hash");
        let b = hash_password("same-password").expect("hash");
        assert_ne!(a, b);
    }

    #[test]
    fn garbage_stored_hash_never_verifies() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }
}
