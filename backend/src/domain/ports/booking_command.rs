//! Driving port for booking mutations.

use async_trait::async_trait;

use crate::domain::{Booking, BookingId, BookingSubmission, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingCommand: Send + Sync {
    /// Validate a visitor's request and store it as `pending`.
    async fn create(&self, submission: BookingSubmission) -> Result<Booking, Error>;

    /// Set the review status. `status` is the raw client value so an unknown
    /// state can be reported in the response language.
    async fn update_status(&self, id: BookingId, status: Option<String>)
    -> Result<Booking, Error>;
}
