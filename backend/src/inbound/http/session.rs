//! Session helpers and the admin role gate.
//!
//! The session lives entirely in a private (encrypted and authenticated)
//! cookie holding `user_id`, `username` and `role`. Handlers never touch the
//! raw Actix session; they ask [`SessionContext`] for the current identity or
//! for an [`AdminSession`].

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{
    AuthenticatedUser, Error, MessageKey, Messages, UserId, UserRole, Username,
};

use super::state::HttpState;

pub(crate) const USER_ID_KEY: &str = "user_id";
pub(crate) const USERNAME_KEY: &str = "username";
pub(crate) const ROLE_KEY: &str = "role";

/// Proof that the current request carries an administrator session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession(AuthenticatedUser);

impl AdminSession {
    pub fn user(&self) -> &AuthenticatedUser {
        &self.0
    }
}

/// Wrapper that exposes higher-level session operations.
///
/// Rejections are worded with the locale of the registered [`HttpState`].
#[derive(Clone)]
pub struct SessionContext {
    session: Session,
    messages: Messages,
}

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            messages: Messages::default(),
        }
    }

    #[must_use]
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn messages(&self) -> Messages {
        self.messages
    }

    fn unauthorized(&self) -> Error {
        Error::unauthorized(self.messages.text(MessageKey::Unauthorized))
    }

    /// Persist the authenticated identity, rotating the session id first.
    pub fn persist_user(&self, user: &AuthenticatedUser) -> Result<(), Error> {
        self.session.renew();
        let write = |key: &str, value: &str| {
            self.session
                .insert(key, value)
                .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
        };
        write(USER_ID_KEY, &user.id.to_string())?;
        write(USERNAME_KEY, user.username.as_str())?;
        write(ROLE_KEY, user.role.as_str())
    }

    /// The identity in the session, if present and well formed.
    ///
    /// A cookie that decrypts but carries malformed values is treated as
    /// absent.
    pub fn current(&self) -> Result<Option<AuthenticatedUser>, Error> {
        let read = |key: &str| {
            self.session
                .get::<String>(key)
                .map_err(|error| Error::internal(format!("failed to read session: {error}")))
        };
        let (Some(id), Some(username), Some(role)) =
            (read(USER_ID_KEY)?, read(USERNAME_KEY)?, read(ROLE_KEY)?)
        else {
            return Ok(None);
        };

        let parsed = id
            .parse::<UserId>()
            .map_err(|err| err.to_string())
            .and_then(|id| {
                let username = Username::new(&username).map_err(|err| err.to_string())?;
                let role = role.parse::<UserRole>().map_err(|err| err.to_string())?;
                Ok(AuthenticatedUser { id, username, role })
            });
        match parsed {
            Ok(user) => Ok(Some(user)),
            Err(error) => {
                warn!("malformed identity in session cookie: {error}");
                Ok(None)
            }
        }
    }

    /// Require any signed-in identity or return `401 Unauthorized`.
    pub fn require_user(&self) -> Result<AuthenticatedUser, Error> {
        self.current()
            .ok()
            .flatten()
            .ok_or_else(|| self.unauthorized())
    }

    /// The single role gate for back-office endpoints.
    ///
    /// Absent, undecodable and non-admin sessions all yield `401` with the
    /// message `Unauthorized`.
    pub fn require_admin(&self) -> Result<AdminSession, Error> {
        let user = self.require_user()?;
        if user.role.is_admin() {
            Ok(AdminSession(user))
        } else {
            Err(self.unauthorized())
        }
    }

    /// Drop every key and expire the cookie.
    pub fn purge(&self) {
        self.session.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let messages = req
            .app_data::<web::Data<HttpState>>()
            .map(|state| state.messages)
            .unwrap_or_default();
        let fut = Session::from_request(req, payload);
        Box::pin(async move {
            fut.await
                .map(|session| SessionContext::new(session).with_messages(messages))
        })
    }
}
