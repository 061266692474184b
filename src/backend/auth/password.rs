/**
 * Password Hashing
 *
 * Passwords are hashed with bcrypt. Each hash embeds its own random salt and
 * cost, so hashing the same password twice yields two different strings, and
 * verification needs nothing but the stored hash. bcrypt compares digests in
 * constant time.
 *
 * bcrypt only reads the first 72 bytes of its input, including a trailing
 * NUL. Rather than silently truncating, hashing refuses any password longer
 * than `MAX_PASSWORD_BYTES`, and such a password never verifies.
 *
 * Plaintext passwords only ever live in the request body; they are never
 * logged or stored.
 */

use thiserror::Error;

/// Longest password bcrypt can hash without truncating it
pub const MAX_PASSWORD_BYTES: usize = 71;

/// Password hashing failure
#[derive(Debug, Error)]
pub enum PasswordError {
    /// The password is longer than `MAX_PASSWORD_BYTES`
    #[error("Password must be at most 71 bytes")]
    TooLong,
    /// bcrypt rejected the input or the stored hash is not a bcrypt hash
    #[error("Password hashing error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

/// bcrypt hasher with a fixed cost
///
/// The cost is read once from configuration and shared by every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher {
    /// Create a hasher using `cost` (bcrypt accepts 4 to 31)
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash `plaintext` with a fresh salt
    pub fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        match bcrypt::non_truncating_hash(plaintext, self.cost) {
            Ok(hash) => Ok(hash),
            Err(bcrypt::BcryptError::Truncation(_)) => Err(PasswordError::TooLong),
            Err(e) => Err(e.into()),
        }
    }

    /// Check `plaintext` against a stored hash
    ///
    /// Returns `Ok(false)` on mismatch, including for passwords too long to
    /// have been hashed; an error only when the stored hash cannot be parsed.
    pub fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, PasswordError> {
        match bcrypt::non_truncating_verify(plaintext, hash) {
            Ok(matches) => Ok(matches),
            Err(bcrypt::BcryptError::Truncation(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = hasher().hash("pw").unwrap();
        assert!(hasher().verify("pw", &hash).unwrap());
        assert!(!hasher().verify("pw2", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let first = hasher().hash("password123").unwrap();
        let second = hasher().hash("password123").unwrap();
        assert_ne!(first, second);
        assert!(!first.contains("password123"));
    }

    #[test]
    fn test_verify_rejects_non_bcrypt_hash() {
        assert!(hasher().verify("pw", "plaintext-in-db").is_err());
    }

    #[test]
    fn test_long_password_is_refused_not_truncated() {
        let longest = "a".repeat(MAX_PASSWORD_BYTES);
        let hash = hasher().hash(&longest).unwrap();
        assert!(hasher().verify(&longest, &hash).unwrap());

        let too_long = format!("{}b", longest);
        assert!(matches!(hasher().hash(&too_long), Err(PasswordError::TooLong)));
        assert!(!hasher().verify(&too_long, &hash).unwrap());
    }

    #[test]
    fn test_default_cost() {
        assert_eq!(PasswordHasher::default().cost(), bcrypt::DEFAULT_COST);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_hash_verifies_only_its_password(
            password in "[a-zA-Z0-9!@#]{1,32}",
            other in "[a-zA-Z0-9!@#]{1,32}",
        ) {
            let hash = hasher().hash(&password).unwrap();
            prop_assert!(hasher().verify(&password, &hash).unwrap());
            if other != password {
                prop_assert!(!hasher().verify(&other, &hash).unwrap());
            }
        }
    }
}
