//! Short, non-reversible identifier for the active session key.
//!
//! Operators compare the logged fingerprint across instances to confirm they
//! share a key; a mismatch explains cookies that stop decrypting after a
//! deploy.

use std::fmt;

use actix_web::cookie::Key;
use sha2::{Digest, Sha256};

const FINGERPRINT_BYTES: usize = 8;

/// Truncated SHA-256 digest of the key's signing half, rendered as lowercase
/// hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFingerprint(String);

impl KeyFingerprint {
    /// Fingerprint `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use actix_web::cookie::Key;
    /// use temple_backend::inbound::http::session_config::fingerprint::KeyFingerprint;
    ///
    /// let fingerprint = KeyFingerprint::of(&Key::derive_from(&[7u8; 64]));
    /// assert_eq!(fingerprint.as_str().len(), 16);
    /// ```
    #[must_use]
    pub fn of(key: &Key) -> Self {
        let digest = Sha256::digest(key.signing());
        Self(hex::encode(&digest[..FINGERPRINT_BYTES]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
