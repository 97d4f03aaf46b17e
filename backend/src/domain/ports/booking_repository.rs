//! Port for booking persistence, including the atomic overlap guard.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Booking, BookingId, BookingStatus, NewBooking};

use super::define_port_error;

define_port_error! {
    /// Errors raised by booking repository adapters.
    pub enum BookingRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "booking repository connection failed: {message}"; unavailable,
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "booking repository query failed: {message}",
    }
}

/// Result of a conditional booking insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingInsertOutcome {
    /// No approved booking overlapped; the pending booking was stored.
    Created(Booking),
    /// An approved booking already covers part of the requested period.
    Overlaps { conflicting: BookingId },
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert `booking` unless an approved booking overlaps its period.
    ///
    /// The check and the insert must be atomic with respect to other calls.
    async fn create_unless_overlapping(
        &self,
        booking: NewBooking,
    ) -> Result<BookingInsertOutcome, BookingRepositoryError>;

    /// All bookings, newest `created_at` first.
    async fn list_newest_first(&self) -> Result<Vec<Booking>, BookingRepositoryError>;

    /// Set the status and `updated_at`; `None` when the id is unknown.
    async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Booking>, BookingRepositoryError>;
}
