//! Domain primitives, services and ports.
//!
//! Purpose: define the strongly typed records (users, bookings, activities,
//! gallery items), the validation rules that guard them, and the services that
//! implement the driving ports. Nothing here knows about HTTP or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Messages / MessageKey / Locale: localized response text.
//! - User, Booking, Activity, GalleryItem and their submissions.
//! - AuthService, RegistrationService, BookingService, ActivityService,
//!   GalleryService.

mod activity;
mod activity_service;
mod auth;
mod auth_service;
mod booking;
mod booking_service;
pub mod error;
mod gallery;
mod gallery_service;
mod messages;
pub mod ports;
mod record_id;
mod registration_service;
mod trace_id;
mod user;
pub(crate) mod validation;

pub use self::activity::{
    Activity, ActivityId, ActivityPatch, ActivityStatus, ActivitySubmission, UnknownActivityStatus,
};
pub use self::activity_service::ActivityService;
pub use self::auth::{AuthenticatedUser, LoginCredentials, LoginValidationError};
pub use self::auth_service::AuthService;
pub use self::booking::{
    Booking, BookingId, BookingStatus, BookingSubmission, EndBeforeStart, NewBooking,
    StayPeriod, UnknownBookingStatus,
};
pub use self::booking_service::BookingService;
pub(crate) use self::error::infrastructure_error;
pub use self::error::{Error, ErrorCode, ErrorValidationError, InfrastructureFailure};
pub use self::gallery::{
    GalleryCategory, GalleryItem, GalleryItemId, GallerySubmission, UnknownGalleryCategory,
};
pub use self::gallery_service::{GalleryService, INVALID_CATEGORY};
pub use self::messages::{Locale, MessageKey, Messages, UnknownLocale};
pub use self::registration_service::RegistrationService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    Email, PASSWORD_MIN, PasswordHash, USERNAME_MAX, USERNAME_MIN, User, UserDraft, UserId,
    UserRole, UserSummary, UserValidationError, Username,
};
pub use self::validation::parse_calendar_date;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use temple_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::unauthorized("Unauthorized"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
