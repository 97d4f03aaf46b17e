//! Driving port for the public activity calendar.

use async_trait::async_trait;

use crate::domain::{Activity, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityQuery: Send + Sync {
    /// All activities in calendar order.
    async fn list(&self) -> Result<Vec<Activity>, Error>;
}
