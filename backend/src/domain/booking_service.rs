//! Booking validation, the approved-overlap guard and status review.
//!
//! Validation order matters for the response message: missing fields first
//! (in form order), then the guest count, then the date rules, and finally
//! the overlap check, which runs inside the repository's conditional insert.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::info;

use crate::domain::ports::{
    BookingCommand, BookingInsertOutcome, BookingQuery, BookingRepository, BookingRepositoryError,
};
use crate::domain::validation::{invalid_field, missing_field, required_date, required_text};
use crate::domain::{
    Booking, BookingId, BookingStatus, BookingSubmission, Error, MessageKey, Messages, NewBooking,
    StayPeriod, infrastructure_error,
};

/// Booking service implementing [`BookingCommand`] and [`BookingQuery`].
#[derive(Clone)]
pub struct BookingService<R> {
    bookings: Arc<R>,
    clock: Arc<dyn Clock>,
    messages: Messages,
}

impl<R> BookingService<R> {
    pub fn new(bookings: Arc<R>, clock: Arc<dyn Clock>, messages: Messages) -> Self {
        Self {
            bookings,
            clock,
            messages,
        }
    }

    fn map_repository_error(&self, error: BookingRepositoryError, fallback: MessageKey) -> Error {
        infrastructure_error(self.messages, error.failure(), fallback, &error)
    }

    fn validate(&self, submission: BookingSubmission) -> Result<NewBooking, Error> {
        let messages = self.messages;
        let BookingSubmission {
            full_name,
            email,
            phone,
            start_date,
            end_date,
            number_of_people,
            purpose,
            notes,
        } = submission;

        let full_name = required_text(messages, "fullName", full_name)?;
        let email = required_text(messages, "email", email)?;
        let phone = required_text(messages, "phone", phone)?;
        if start_date.as_deref().is_none_or(|raw| raw.trim().is_empty()) {
            return Err(missing_field(messages, "startDate"));
        }
        if end_date.as_deref().is_none_or(|raw| raw.trim().is_empty()) {
            return Err(missing_field(messages, "endDate"));
        }
        let Some(number_of_people) = number_of_people else {
            return Err(missing_field(messages, "numberOfPeople"));
        };
        let purpose = required_text(messages, "purpose", purpose)?;

        if number_of_people < 1 {
            return Err(invalid_field(
                messages,
                "numberOfPeople",
                MessageKey::PeopleAtLeastOne,
                "at_least_one",
            ));
        }
        // Stored in a Postgres INTEGER column.
        let number_of_people = u32::try_from(number_of_people)
            .ok()
            .filter(|count| i32::try_from(*count).is_ok())
            .ok_or_else(|| {
                invalid_field(
                    messages,
                    "numberOfPeople",
                    MessageKey::PeopleTooMany,
                    "too_many",
                )
            })?;

        let start = required_date(messages, "startDate", start_date.as_deref())?;
        let end = required_date(messages, "endDate", end_date.as_deref())?;

        let now = self.clock.utc();
        if start < now.date_naive() {
            return Err(invalid_field(
                messages,
                "startDate",
                MessageKey::BookingStartInPast,
                "start_in_past",
            ));
        }
        let period = StayPeriod::new(start, end).map_err(|_| {
            invalid_field(
                messages,
                "endDate",
                MessageKey::BookingEndBeforeStart,
                "end_before_start",
            )
        })?;

        Ok(NewBooking {
            id: BookingId::random(),
            full_name,
            email,
            phone,
            period,
            number_of_people,
            purpose,
            notes: notes.filter(|text| !text.trim().is_empty()),
            created_at: now,
        })
    }
}

#[async_trait]
impl<R> BookingCommand for BookingService<R>
where
    R: BookingRepository,
{
    async fn create(&self, submission: BookingSubmission) -> Result<Booking, Error> {
        let booking = self.validate(submission)?;
        let period = booking.period;

        let outcome = self
            .bookings
            .create_unless_overlapping(booking)
            .await
            .map_err(|err| self.map_repository_error(err, MessageKey::SaveFailed))?;

        match outcome {
            BookingInsertOutcome::Created(booking) => {
                info!(
                    booking_id = %booking.id,
                    start = %booking.start_date,
                    end = %booking.end_date,
                    "booking created"
                );
                Ok(booking)
            }
            BookingInsertOutcome::Overlaps { conflicting } => {
                info!(
                    %conflicting,
                    start = %period.start(),
                    end = %period.end(),
                    "booking rejected: overlaps an approved booking"
                );
                Err(Error::conflict(self.messages.text(MessageKey::BookingOverlap))
                    .with_details(json!({ "code": "booking_overlap" })))
            }
        }
    }

    async fn update_status(
        &self,
        id: BookingId,
        status: Option<String>,
    ) -> Result<Booking, Error> {
        let status = status
            .as_deref()
            .and_then(|raw| raw.parse::<BookingStatus>().ok())
            .ok_or_else(|| {
                invalid_field(self.messages, "status", MessageKey::InvalidStatus, "invalid_status")
            })?;

        let updated = self
            .bookings
            .update_status(id, status, self.clock.utc())
            .await
            .map_err(|err| self.map_repository_error(err, MessageKey::UpdateFailed))?
            .ok_or_else(|| Error::not_found(self.messages.text(MessageKey::BookingNotFound)))?;

        info!(booking_id = %id, status = %status, "booking status changed");
        Ok(updated)
    }
}

#[async_trait]
impl<R> BookingQuery for BookingService<R>
where
    R: BookingRepository,
{
    async fn list(&self) -> Result<Vec<Booking>, Error> {
        self.bookings
            .list_newest_first()
            .await
            .map_err(|err| self.map_repository_error(err, MessageKey::FetchFailed))
    }
}

#[cfg(test)]
#[path = "booking_service_tests.rs"]
mod tests;
