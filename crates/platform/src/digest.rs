//! Password Digest Computation
//!
//! The stored credential is a fast, unsalted SHA-256 digest compared by
//! equality. The digest is exchanged with storage as an opaque value, so a
//! deployment can substitute a salted, slow hash behind the same calls.
//!
//! WARNING: an unsalted fast hash is unsuitable for credential storage.
//! This module preserves a legacy storage contract, nothing more.

use std::fmt;

use sha2::{Digest, Sha256};

/// Opaque stored representation of a password
///
/// Holds the lowercase-hex SHA-256 of the password bytes. Two digests are
/// equal iff the passwords they were computed from are equal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Digest a clear-text password
    pub fn of(password: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        Self(hex_encode(&hasher.finalize()))
    }

    /// Rehydrate a digest from its stored string form
    pub fn from_stored(stored: impl Into<String>) -> Self {
        Self(stored.into())
    }

    /// The stored string form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PasswordDigest").field(&"[DIGEST]").finish()
    }
}

impl fmt::Display for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[DIGEST]")
    }
}

/// Encode bytes as lowercase hex string
fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
