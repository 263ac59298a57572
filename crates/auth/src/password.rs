use argon2::Argon2;
use argon2::PasswordHash;
use argon2::PasswordHasher;
use argon2::PasswordVerifier;
use argon2::password_hash::SaltString;

fn salt() -> SaltString {
    use rand::Rng;
    let ref mut bytes = [0u8; 16];
    rand::rng().fill(bytes);
    SaltString::encode_b64(bytes).expect("salt")
}

pub fn hash(password: &str) -> Result<String, argon2::password_hash::Error> {
    Argon2::default()
        .hash_password(password.as_bytes(), &salt())
        .map(|h| h.to_string())
}

pub fn verify(password: &str, hashword: &str) -> bool {
    PasswordHash::new(hashword)
        .ok()
        .as_ref()
        .map(|hash| {
            Argon2::default()
                .verify_password(password.as_bytes(), hash)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Spends one Argon2 computation and discards it. Called on the
/// unknown-email login path so that "no such user" and "wrong password"
/// cost comparable time (anti-enumeration).
pub fn burn(password: &str) {
    let _ = hash(password);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_own_password() {
        let hashword = hash("longenough1").expect("hash");
        assert!(verify("longenough1", &hashword));
    }
    #[test]
    fn wrong_password_fails() {
        let hashword = hash("longenough1").expect("hash");
        assert!(!verify("different1", &hashword));
    }
    #[test]
    fn hashes_are_salted() {
        let a = hash("longenough1").expect("hash");
        let b = hash("longenough1").expect("hash");
        assert_ne!(a, b);
    }
    #[test]
    fn garbage_hash_never_verifies() {
        assert!(!verify("longenough1", "not-a-phc-string"));
    }
}
