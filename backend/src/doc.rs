//! OpenAPI document for the temple REST API.
//!
//! Served by Swagger UI at `/docs` in debug builds and printed by the
//! `openapi-dump` binary.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{
    Activity, ActivityStatus, Booking, BookingStatus, Error, ErrorCode, GalleryCategory,
    GalleryItem, UserRole, UserSummary,
};
use crate::inbound::http::activities::{ActivityCreatedResponse, ActivityRequest};
use crate::inbound::http::auth::{LoginRequest, MessageResponse, SessionResponse};
use crate::inbound::http::bookings::{
    BookingCreatedResponse, CreateBookingRequest, PeopleCount, UpdateBookingStatusRequest,
};
use crate::inbound::http::gallery::{GalleryCreatedResponse, GalleryRequest};
use crate::inbound::http::register::{RegisterRequest, RegisterResponse};
use crate::inbound::http::session_config::SESSION_COOKIE_NAME;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                SESSION_COOKIE_NAME,
                "Private session cookie issued by POST /api/auth/login.",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Temple backend API",
        description = "Bookings, activities and gallery for the temple website, plus the \
                       session-authenticated back office."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::auth::current_session,
        crate::inbound::http::register::register,
        crate::inbound::http::bookings::create_booking,
        crate::inbound::http::bookings::list_bookings,
        crate::inbound::http::bookings::update_booking_status,
        crate::inbound::http::activities::list_activities,
        crate::inbound::http::activities::create_activity,
        crate::inbound::http::activities::update_activity,
        crate::inbound::http::activities::delete_activity,
        crate::inbound::http::gallery::list_gallery,
        crate::inbound::http::gallery::create_gallery_item,
        crate::inbound::http::gallery::delete_gallery_item,
        crate::inbound::http::health::database,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        UserSummary,
        UserRole,
        Booking,
        BookingStatus,
        Activity,
        ActivityStatus,
        GalleryItem,
        GalleryCategory,
        LoginRequest,
        SessionResponse,
        MessageResponse,
        RegisterRequest,
        RegisterResponse,
        CreateBookingRequest,
        PeopleCount,
        BookingCreatedResponse,
        UpdateBookingStatusRequest,
        ActivityRequest,
        ActivityCreatedResponse,
        GalleryRequest,
        GalleryCreatedResponse,
    )),
    tags(
        (name = "auth", description = "Login, logout and session inspection"),
        (name = "bookings", description = "Accommodation requests and review"),
        (name = "activities", description = "Temple activity calendar"),
        (name = "gallery", description = "Photo gallery"),
        (name = "health", description = "Probes")
    )
)]
pub struct ApiDoc;
