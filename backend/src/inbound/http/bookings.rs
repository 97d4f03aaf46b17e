//! Retreat booking endpoints.
//!
//! ```text
//! POST  /api/bookings        visitor submits a request
//! GET   /api/bookings        admin lists every request, newest first
//! PATCH /api/bookings/{id}   admin sets {"status":"approved"}
//! ```

use actix_web::{HttpResponse, get, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::validation::invalid_field;
use crate::domain::{Booking, BookingId, BookingSubmission, Error, MessageKey, Messages};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_path_id;

/// `numberOfPeople` as sent by forms (a string) or by API clients (a number).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum PeopleCount {
    Number(i64),
    Text(String),
}

impl PeopleCount {
    fn resolve(self, messages: Messages) -> Result<Option<i64>, Error> {
        match self {
            Self::Number(n) => Ok(Some(n)),
            Self::Text(text) if text.trim().is_empty() => Ok(None),
            Self::Text(text) => text.trim().parse().map(Some).map_err(|_| {
                invalid_field(
                    messages,
                    "numberOfPeople",
                    MessageKey::PeopleAtLeastOne,
                    "invalid_number",
                )
            }),
        }
    }
}

/// Booking request body.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub number_of_people: Option<PeopleCount>,
    pub purpose: Option<String>,
    pub notes: Option<String>,
}

impl CreateBookingRequest {
    fn into_submission(self, messages: Messages) -> Result<BookingSubmission, Error> {
        let number_of_people = self
            .number_of_people
            .map(|count| count.resolve(messages))
            .transpose()?
            .flatten();
        Ok(BookingSubmission {
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            start_date: self.start_date,
            end_date: self.end_date,
            number_of_people,
            purpose: self.purpose,
            notes: self.notes,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingCreatedResponse {
    pub message: String,
    pub booking: Booking,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBookingStatusRequest {
    /// `pending`, `approved` or `rejected`.
    pub status: Option<String>,
}

/// Submit a booking request.
///
/// Dates overlapping an approved booking are refused with `conflict`.
#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking stored as pending", body = BookingCreatedResponse),
        (status = 400, description = "Invalid fields or overlapping dates", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["bookings"],
    operation_id = "createBooking",
    security([])
)]
#[post("/bookings")]
pub async fn create_booking(
    state: web::Data<HttpState>,
    payload: web::Json<CreateBookingRequest>,
) -> ApiResult<HttpResponse> {
    let submission = payload.into_inner().into_submission(state.messages)?;
    let booking = state.bookings.create(submission).await?;
    Ok(HttpResponse::Created().json(BookingCreatedResponse {
        message: state.messages.text(MessageKey::BookingSaved).to_owned(),
        booking,
    }))
}

#[utoipa::path(
    get,
    path = "/api/bookings",
    responses(
        (status = 200, description = "All bookings, newest first", body = [Booking]),
        (status = 401, description = "Admin session required", body = Error)
    ),
    tags = ["bookings"],
    operation_id = "listBookings"
)]
#[get("/bookings")]
pub async fn list_bookings(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<Booking>>> {
    session.require_admin()?;
    state.bookings_query.list().await.map(web::Json)
}

/// Change a booking's status. Approval does not re-check overlap.
#[utoipa::path(
    patch,
    path = "/api/bookings/{id}",
    params(("id" = String, Path, description = "Booking id")),
    request_body = UpdateBookingStatusRequest,
    responses(
        (status = 200, description = "Updated booking", body = Booking),
        (status = 400, description = "Unknown status or malformed id", body = Error),
        (status = 401, description = "Admin session required", body = Error),
        (status = 404, description = "No such booking", body = Error)
    ),
    tags = ["bookings"],
    operation_id = "updateBookingStatus"
)]
#[patch("/bookings/{id}")]
pub async fn update_booking_status(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<UpdateBookingStatusRequest>,
) -> ApiResult<web::Json<Booking>> {
    let admin = session.require_admin()?;
    let id: BookingId = parse_path_id(state.messages, "id", &path)?;
    let booking = state
        .bookings
        .update_status(id, payload.into_inner().status)
        .await?;
    tracing::debug!(admin = %admin.user().username, booking_id = %id, "booking status patched");
    Ok(web::Json(booking))
}
