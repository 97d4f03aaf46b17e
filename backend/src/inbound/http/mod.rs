//! HTTP inbound adapter exposing the REST endpoints.

pub mod activities;
pub mod auth;
pub mod bookings;
pub mod error;
pub mod gallery;
pub mod health;
pub mod register;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::web;

use crate::domain::Messages;

pub use error::ApiResult;

/// Register every `/api` endpoint on `cfg`.
///
/// The caller mounts this under `web::scope("/api")` and wraps it with the
/// session middleware.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use temple_backend::inbound::http::api_services;
///
/// let app = App::new().service(web::scope("/api").configure(api_services));
/// ```
pub fn api_services(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::login)
        .service(auth::logout)
        .service(auth::current_session)
        .service(register::register)
        .service(bookings::create_booking)
        .service(bookings::list_bookings)
        .service(bookings::update_booking_status)
        .service(activities::list_activities)
        .service(activities::create_activity)
        .service(activities::update_activity)
        .service(activities::delete_activity)
        .service(gallery::list_gallery)
        .service(gallery::create_gallery_item)
        .service(gallery::delete_gallery_item);
}

/// JSON extractor settings: undecodable bodies become `400 invalid_request`
/// in the shared error envelope.
pub fn json_config(messages: Messages) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(validation::json_error_handler(messages))
}
