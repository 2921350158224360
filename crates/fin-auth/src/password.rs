//! Credential hashing for stored passwords.
//!
//! Digests are unsalted SHA-256, hex encoded: the same input always produces
//! the same digest and verification is a plain string comparison. This is the
//! format existing user rows already carry, so it is preserved as-is; the
//! precomputation weakness that comes with an unsalted digest is documented
//! behavior, not an oversight.

use sha2::{Digest, Sha256};

/// Hash a plaintext password into its stored representation.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a plaintext password against a stored digest.
pub fn verify_password(password: &str, digest: &str) -> bool {
    hash_password(password) == digest
}
