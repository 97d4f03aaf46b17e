//! Driving port for credential login.
//!
//! Inbound adapters call this to authenticate without knowing the credential
//! store or the hashing scheme, so handler tests can substitute a double.

use async_trait::async_trait;

use crate::domain::{AuthenticatedUser, Error, LoginCredentials};

/// Stable `details.reason` values attached to login failures.
pub mod login_failure {
    /// No account matches the identifier.
    pub const USER_NOT_FOUND: &str = "user_not_found";
    /// The password did not verify.
    pub const INVALID_CREDENTIALS: &str = "invalid_credentials";
    /// The account exists but may not use the back office.
    pub const ROLE_NOT_PERMITTED: &str = "role_not_permitted";
}

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Verify credentials and return the identity to store in the session.
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<AuthenticatedUser, Error>;
}
