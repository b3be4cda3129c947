// Password hashing and plaintext hygiene

use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use subtle::ConstantTimeEq;

/// Stored credential digest - hex SHA-256 of the plaintext password
/// (64-character hex string).
///
/// Equality is constant-time so a login comparison cannot be timed.
///
/// TODO: move to per-account random salt + argon2; the file format and the
/// digest-in/match-out contract stay the same.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretDigest(String);

impl SecretDigest {
    /// Digest a plaintext password
    ///
    /// Deterministic: the same password always produces the same digest.
    pub fn from_secret(secret: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(secret.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    /// Wrap an existing digest string (64 hex characters)
    pub fn from_hex(hash_str: &str) -> Result<Self, String> {
        if hash_str.len() != 64 {
            return Err(format!(
                "Invalid digest length: expected 64, got {}",
                hash_str.len()
            ));
        }
        if !hash_str.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err("Invalid digest format: must be 64 hex characters".to_string());
        }
        Ok(Self(hash_str.to_string()))
    }

    /// Get the digest as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for SecretDigest {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_bytes().ct_eq(other.0.as_bytes()).into()
    }
}

impl Eq for SecretDigest {}

/// Plaintext password wrapper with memory protection
///
/// Uses `secrecy::Secret` so the plaintext cannot end up in logs via
/// `Debug`/`Display` formatting.
pub struct Password(Secret<String>);

impl Password {
    /// Wrap a plaintext password
    pub fn new(raw: &str) -> Self {
        Self(Secret::new(raw.to_string()))
    }

    /// Digest the password
    pub fn digest(&self) -> SecretDigest {
        SecretDigest::from_secret(self.0.expose_secret())
    }

    /// True if the password is empty after trimming
    pub fn is_blank(&self) -> bool {
        self.0.expose_secret().trim().is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password")
            .field("value", &"<REDACTED>")
            .finish()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<REDACTED>")
    }
}
