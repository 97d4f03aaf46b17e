//! Login, logout and session introspection.
//!
//! ```text
//! POST /api/auth/login {"login":"abbot@example.com","password":"secret1"}
//! POST /api/auth/logout
//! GET  /api/auth/session
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{
    AuthenticatedUser, Error, LoginCredentials, LoginValidationError, MessageKey, Messages,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Login request body. `login` is either a username or an email address.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub password: String,
}

/// Successful login or session lookup.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub message: String,
    pub user: AuthenticatedUser,
}

/// Plain acknowledgement.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

fn map_login_validation_error(messages: Messages, err: LoginValidationError) -> Error {
    let field = match err {
        LoginValidationError::EmptyIdentifier => "login",
        LoginValidationError::EmptyPassword => "password",
    };
    Error::invalid_request(messages.text(MessageKey::LoginIncomplete))
        .with_details(json!({ "field": field, "code": "missing_field" }))
}

/// Verify administrator credentials and issue the session cookie.
///
/// Unknown accounts, wrong passwords and non-admin roles all answer `401`;
/// `details.reason` tells them apart. No cookie is set on failure.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = SessionResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Missing login or password", body = Error),
        (status = 401, description = "Rejected credentials", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<SessionResponse>> {
    let LoginRequest { login, password } = payload.into_inner();
    let credentials = LoginCredentials::try_from_parts(&login, &password)
        .map_err(|err| map_login_validation_error(state.messages, err))?;

    let user = state.login.authenticate(&credentials).await?;
    session.persist_user(&user)?;

    Ok(web::Json(SessionResponse {
        message: state.messages.text(MessageKey::LoggedIn).to_owned(),
        user,
    }))
}

/// Clear the session cookie. Succeeds whether or not a session existed.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses((status = 200, description = "Signed out", body = MessageResponse)),
    tags = ["auth"],
    operation_id = "logout",
    security([])
)]
#[post("/auth/logout")]
pub async fn logout(state: web::Data<HttpState>, session: SessionContext) -> HttpResponse {
    session.purge();
    HttpResponse::Ok().json(MessageResponse {
        message: state.messages.text(MessageKey::LoggedOut).to_owned(),
    })
}

/// The identity carried by the current session cookie.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    responses(
        (status = 200, description = "Current identity", body = AuthenticatedUser),
        (status = 401, description = "No session", body = Error)
    ),
    tags = ["auth"],
    operation_id = "currentSession"
)]
#[get("/auth/session")]
pub async fn current_session(session: SessionContext) -> ApiResult<web::Json<AuthenticatedUser>> {
    session.require_user().map(web::Json)
}
