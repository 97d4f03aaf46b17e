//! Port abstraction for the credential store and its errors.
use async_trait::async_trait;

use crate::domain::{Email, User, UserRole, Username};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}"; unavailable,
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// A unique index rejected the insert.
        Duplicate { field: String } => "user with this {field} already exists",
    }
}

/// Credential store operations used by login, registration and the CLI.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find the account whose username or (lowercased) email equals
    /// `identifier`.
    async fn find_by_login(&self, identifier: &str) -> Result<Option<User>, UserPersistenceError>;

    /// Whether either the username or the email is already registered.
    async fn is_taken(
        &self,
        username: &Username,
        email: &Email,
    ) -> Result<bool, UserPersistenceError>;

    /// Insert a new account. Unique violations surface as
    /// [`UserPersistenceError::Duplicate`].
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Change the role of the account matching `identifier`, returning the
    /// updated record or `None` when nothing matches.
    async fn set_role(
        &self,
        identifier: &str,
        role: UserRole,
    ) -> Result<Option<User>, UserPersistenceError>;
}
