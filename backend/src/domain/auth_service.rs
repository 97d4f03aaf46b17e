//! Credential login against the user repository.
//!
//! Only administrators may sign in; the back office has no visitor area.
//! Each failure carries a distinct `details.reason` while sharing the
//! `unauthorized` code.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    LoginService, PasswordHasher, PasswordHasherError, UserPersistenceError, UserRepository,
    login_failure,
};
use crate::domain::{
    AuthenticatedUser, Error, LoginCredentials, MessageKey, Messages, infrastructure_error,
};

/// Authentication service implementing [`LoginService`].
#[derive(Clone)]
pub struct AuthService<U, H> {
    users: Arc<U>,
    hasher: Arc<H>,
    messages: Messages,
}

impl<U, H> AuthService<U, H> {
    pub fn new(users: Arc<U>, hasher: Arc<H>, messages: Messages) -> Self {
        Self {
            users,
            hasher,
            messages,
        }
    }

    fn failure(&self, key: MessageKey, reason: &str) -> Error {
        Error::unauthorized(self.messages.text(key)).with_details(json!({ "reason": reason }))
    }

    fn map_user_error(&self, error: UserPersistenceError) -> Error {
        infrastructure_error(self.messages, error.failure(), MessageKey::FetchFailed, &error)
    }

    fn map_hasher_error(&self, error: PasswordHasherError) -> Error {
        infrastructure_error(self.messages, error.failure(), MessageKey::FetchFailed, &error)
    }
}

#[async_trait]
impl<U, H> LoginService for AuthService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<AuthenticatedUser, Error> {
        let Some(user) = self
            .users
            .find_by_login(credentials.identifier())
            .await
            .map_err(|err| self.map_user_error(err))?
        else {
            debug!("login rejected: no matching account");
            return Err(self.failure(MessageKey::AccountNotFound, login_failure::USER_NOT_FOUND));
        };

        let verified = self
            .hasher
            .verify(credentials.password(), user.password_hash())
            .await
            .map_err(|err| self.map_hasher_error(err))?;
        if !verified {
            debug!(user_id = %user.id(), "login rejected: password mismatch");
            return Err(self.failure(
                MessageKey::WrongPassword,
                login_failure::INVALID_CREDENTIALS,
            ));
        }

        if !user.role().is_admin() {
            debug!(user_id = %user.id(), role = %user.role(), "login rejected: role not permitted");
            return Err(self.failure(MessageKey::AdminOnly, login_failure::ROLE_NOT_PERMITTED));
        }

        info!(user_id = %user.id(), "admin signed in");
        Ok(AuthenticatedUser::from(&user))
    }
}

#[cfg(test)]
#[path = "auth_service_tests.rs"]
mod tests;
