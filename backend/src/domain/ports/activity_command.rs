//! Driving port for activity administration.

use async_trait::async_trait;

use crate::domain::{Activity, ActivityId, ActivitySubmission, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityCommand: Send + Sync {
    /// Create an activity; every field except `status` is required.
    async fn create(&self, submission: ActivitySubmission) -> Result<Activity, Error>;

    /// Merge the fields present in `submission`.
    async fn update(&self, id: ActivityId, submission: ActivitySubmission)
    -> Result<Activity, Error>;

    async fn delete(&self, id: ActivityId) -> Result<(), Error>;
}
