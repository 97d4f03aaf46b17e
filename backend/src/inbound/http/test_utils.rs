//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::SessionMiddleware;
use actix_session::config::CookieContentSecurity;
use actix_session::storage::CookieSessionStore;
use actix_http::Request;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{HttpResponse, Route, test, web};

use super::session_config::SESSION_COOKIE_NAME;
use super::session::SessionContext;
use super::state::{HttpState, HttpStatePorts};
use crate::domain::{AuthenticatedUser, Error, Messages, UserRole, Username};
use crate::domain::ports::{
    DetachedDatabaseProbe, MockActivityCommand, MockActivityQuery, MockBookingCommand,
    MockBookingQuery, MockGalleryCommand, MockGalleryQuery, MockLoginService,
    MockUserRegistration,
};

/// Private-cookie session middleware with a throwaway key and no `Secure`
/// flag, so plain-HTTP test requests round-trip the cookie.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE_NAME.to_owned())
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_secure(false)
        .build()
}

/// Handler state whose ports are expectation-free mocks; `configure` swaps in
/// the ones a test cares about. An unexpected call panics the test.
pub fn state_with(configure: impl FnOnce(&mut HttpStatePorts)) -> HttpState {
    let mut ports = HttpStatePorts {
        login: Arc::new(MockLoginService::new()),
        registration: Arc::new(MockUserRegistration::new()),
        bookings: Arc::new(MockBookingCommand::new()),
        bookings_query: Arc::new(MockBookingQuery::new()),
        activities: Arc::new(MockActivityCommand::new()),
        activities_query: Arc::new(MockActivityQuery::new()),
        gallery: Arc::new(MockGalleryCommand::new()),
        gallery_query: Arc::new(MockGalleryQuery::new()),
        database: Arc::new(DetachedDatabaseProbe),
    };
    configure(&mut ports);
    HttpState::new(ports, Messages::default())
}

/// Identity used by [`sign_in`]; the role varies per test.
pub fn fixture_user(role: UserRole) -> AuthenticatedUser {
    AuthenticatedUser {
        id: "3fa85f64-5717-4562-b3fc-2c963f66afa6"
            .parse()
            .expect("fixture user id"),
        username: Username::new("abbot").expect("fixture username"),
        role,
    }
}

/// Route that writes a session for `role`; mount it at `/test/sign-in`.
pub fn sign_in(role: UserRole) -> Route {
    web::post().to(move |session: SessionContext| async move {
        session.persist_user(&fixture_user(role))?;
        Ok::<_, Error>(HttpResponse::Ok().finish())
    })
}

/// Call `uri` and return the session cookie it sets.
pub async fn session_cookie<S>(app: &S, request: Request) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let response = test::call_service(app, request).await;
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(Cookie::into_owned)
        .expect("session cookie set")
}

/// Sign in through the `/test/sign-in` route.
pub async fn signed_in_cookie<S>(app: &S) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    session_cookie(app, test::TestRequest::post().uri("/test/sign-in").to_request()).await
}
