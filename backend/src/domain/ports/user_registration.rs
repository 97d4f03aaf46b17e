//! Driving port for visitor self-registration.

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::domain::{Error, UserSummary};

/// Raw registration payload. Any role supplied by a client is dropped before
/// it reaches this type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationSubmission {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<Zeroizing<String>>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistration: Send + Sync {
    /// Validate, hash and store a new `user`-role account.
    async fn register(&self, submission: RegistrationSubmission) -> Result<UserSummary, Error>;
}
