//! bcrypt implementation of the `PasswordHasher` port.
//!
//! Hashing is CPU-bound, so every call moves to the blocking pool.

use async_trait::async_trait;

use crate::domain::PasswordHash;
use crate::domain::ports::{PasswordHasher, PasswordHasherError};

/// Work factor for new hashes.
pub const DEFAULT_COST: u32 = 10;

#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl BcryptPasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the work factor. Tests use the bcrypt minimum (4).
    #[must_use]
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

async fn blocking<T, F>(work: F) -> Result<T, PasswordHasherError>
where
    F: FnOnce() -> Result<T, bcrypt::BcryptError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|err| PasswordHasherError::hashing(err.to_string()))?
        .map_err(|err| PasswordHasherError::hashing(err.to_string()))
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHasherError> {
        let password = zeroize::Zeroizing::new(password.to_owned());
        let cost = self.cost;
        let encoded = blocking(move || bcrypt::hash(password.as_bytes(), cost)).await?;
        Ok(PasswordHash::from_encoded(encoded))
    }

    async fn verify(
        &self,
        password: &str,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        let password = zeroize::Zeroizing::new(password.to_owned());
        let encoded = hash.as_encoded().to_owned();
        blocking(move || bcrypt::verify(password.as_bytes(), &encoded)).await
    }
}
