use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::domain::ports::{BookingInsertOutcome, BookingRepository, BookingRepositoryError};
use crate::domain::{Booking, BookingId, BookingStatus, NewBooking};

/// Booking store kept in process memory.
///
/// The mutex is held across the overlap check and the push, which gives the
/// same serialisation as the table lock in the Diesel adapter.
#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    bookings: Mutex<Vec<Booking>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn create_unless_overlapping(
        &self,
        booking: NewBooking,
    ) -> Result<BookingInsertOutcome, BookingRepositoryError> {
        let mut bookings = self.bookings.lock().await;
        if let Some(existing) = bookings.iter().find(|b| b.blocks(&booking.period)) {
            return Ok(BookingInsertOutcome::Overlaps {
                conflicting: existing.id,
            });
        }
        let created = booking.into_booking();
        bookings.push(created.clone());
        Ok(BookingInsertOutcome::Created(created))
    }

    async fn list_newest_first(&self) -> Result<Vec<Booking>, BookingRepositoryError> {
        let mut listed = self.bookings.lock().await.clone();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }

    async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Booking>, BookingRepositoryError> {
        let mut bookings = self.bookings.lock().await;
        Ok(bookings.iter_mut().find(|b| b.id == id).map(|booking| {
            booking.status = status;
            booking.updated_at = updated_at;
            booking.clone()
        }))
    }
}
