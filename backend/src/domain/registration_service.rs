//! Visitor self-registration.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::domain::ports::{
    PasswordHasher, RegistrationSubmission, UserPersistenceError, UserRegistration,
    UserRepository,
};
use crate::domain::validation::missing_field;
use crate::domain::{
    Email, Error, MessageKey, Messages, PASSWORD_MIN, User, UserDraft, UserId, UserRole,
    UserSummary, UserValidationError, Username, infrastructure_error,
};

/// Registration service implementing [`UserRegistration`].
#[derive(Clone)]
pub struct RegistrationService<U, H> {
    users: Arc<U>,
    hasher: Arc<H>,
    clock: Arc<dyn Clock>,
    messages: Messages,
}

struct ValidatedRegistration {
    username: Username,
    email: Email,
    password: Zeroizing<String>,
}

impl<U, H> RegistrationService<U, H> {
    pub fn new(users: Arc<U>, hasher: Arc<H>, clock: Arc<dyn Clock>, messages: Messages) -> Self {
        Self {
            users,
            hasher,
            clock,
            messages,
        }
    }

    fn invalid(&self, field: &str, key: MessageKey, code: &str) -> Error {
        Error::invalid_request(self.messages.text(key))
            .with_details(json!({ "field": field, "code": code }))
    }

    fn taken(&self) -> Error {
        Error::conflict(self.messages.text(MessageKey::AccountTaken))
            .with_details(json!({ "code": "account_taken" }))
    }

    fn map_validation(&self, error: UserValidationError) -> Error {
        match error {
            UserValidationError::EmptyUsername => missing_field(self.messages, "username"),
            UserValidationError::UsernameTooShort { .. } => {
                self.invalid("username", MessageKey::UsernameTooShort, "username_too_short")
            }
            UserValidationError::UsernameTooLong { .. } => {
                self.invalid("username", MessageKey::UsernameTooLong, "username_too_long")
            }
            UserValidationError::EmptyEmail => missing_field(self.messages, "email"),
            UserValidationError::InvalidEmail => {
                self.invalid("email", MessageKey::EmailInvalid, "invalid_email")
            }
            UserValidationError::PasswordTooShort { .. } => {
                self.invalid("password", MessageKey::PasswordTooShort, "password_too_short")
            }
            UserValidationError::UnknownRole(_) => {
                Error::internal(self.messages.text(MessageKey::SaveFailed))
            }
        }
    }

    fn map_persistence(&self, error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::Duplicate { .. } => self.taken(),
            other => {
                infrastructure_error(self.messages, other.failure(), MessageKey::SaveFailed, &other)
            }
        }
    }

    /// Presence first, in field order, so the message names the first gap.
    fn validate(&self, submission: RegistrationSubmission) -> Result<ValidatedRegistration, Error> {
        let RegistrationSubmission {
            username,
            email,
            password,
        } = submission;

        let present = |value: Option<&str>| value.is_some_and(|text| !text.trim().is_empty());
        for (field, value) in [
            ("username", username.as_deref()),
            ("email", email.as_deref()),
            ("password", password.as_deref().map(String::as_str)),
        ] {
            if !present(value) {
                return Err(missing_field(self.messages, field));
            }
        }

        let username =
            Username::new(username.unwrap_or_default()).map_err(|err| self.map_validation(err))?;
        let email = Email::new(email.unwrap_or_default()).map_err(|err| self.map_validation(err))?;
        let password = password.unwrap_or_default();
        if password.chars().count() < PASSWORD_MIN {
            return Err(self.map_validation(UserValidationError::PasswordTooShort {
                min: PASSWORD_MIN,
            }));
        }

        Ok(ValidatedRegistration {
            username,
            email,
            password,
        })
    }
}

#[async_trait]
impl<U, H> UserRegistration for RegistrationService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    async fn register(&self, submission: RegistrationSubmission) -> Result<UserSummary, Error> {
        let ValidatedRegistration {
            username,
            email,
            password,
        } = self.validate(submission)?;

        let taken = self
            .users
            .is_taken(&username, &email)
            .await
            .map_err(|err| self.map_persistence(err))?;
        if taken {
            return Err(self.taken());
        }

        let password_hash = self.hasher.hash(password.as_str()).await.map_err(|err| {
            infrastructure_error(self.messages, err.failure(), MessageKey::SaveFailed, &err)
        })?;

        let user = User::new(UserDraft {
            id: UserId::random(),
            username,
            email,
            password_hash,
            role: UserRole::User,
            created_at: self.clock.utc(),
        });

        if let Err(err) = self.users.insert(&user).await {
            if matches!(err, UserPersistenceError::Duplicate { .. }) {
                warn!(username = %user.username(), "registration lost a uniqueness race");
            }
            return Err(self.map_persistence(err));
        }

        info!(user_id = %user.id(), username = %user.username(), "user registered");
        Ok(user.summary())
    }
}

#[cfg(test)]
#[path = "registration_service_tests.rs"]
mod tests;
