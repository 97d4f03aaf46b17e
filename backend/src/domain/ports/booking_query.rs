//! Driving port for booking reads.

use async_trait::async_trait;

use crate::domain::{Booking, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingQuery: Send + Sync {
    /// Every booking, newest first.
    async fn list(&self) -> Result<Vec<Booking>, Error>;
}
