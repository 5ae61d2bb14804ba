//! Password hashing.

use bcrypt::DEFAULT_COST;
use snafu::{ResultExt, Snafu};

/// Errors from hashing or verifying a password.
#[derive(Debug, Snafu)]
pub enum Error {
    /// Failed to hash password.
    #[snafu(display("Failed to hash password"))]
    Hash { source: bcrypt::BcryptError },

    /// Failed to verify password.
    #[snafu(display("Failed to verify password"))]
    Verify { source: bcrypt::BcryptError },
}

/// Hash a password with bcrypt at the default cost.
///
/// The result is a self-describing `$2b$...` string carrying the algorithm,
/// cost, salt and digest, so verification needs nothing stored alongside it.
pub fn hash_password(password: &str) -> Result<String, Error> {
    bcrypt::hash(password, DEFAULT_COST).context(HashSnafu)
}

/// Verify a password against a stored bcrypt hash.
///
/// All bcrypt variants ($2a$, $2b$, $2y$) are accepted.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, Error> {
    bcrypt::verify(password, hash).context(VerifySnafu)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let hash = hash_password("Abcdef1!").unwrap();
        assert!(hash.starts_with("$2b$"));
        assert!(verify_password("Abcdef1!", &hash).unwrap());
        assert!(!verify_password("Abcdef1.", &hash).unwrap());
    }

    #[test]
    fn verify_rejects_garbage_hash() {
        assert!(verify_password("Abcdef1!", "not-a-hash").is_err());
    }
}
