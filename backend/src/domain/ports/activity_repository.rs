//! Port for activity persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Activity, ActivityId, ActivityPatch};

use super::define_port_error;

define_port_error! {
    /// Errors raised by activity repository adapters.
    pub enum ActivityRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "activity repository connection failed: {message}"; unavailable,
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "activity repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    async fn insert(&self, activity: &Activity) -> Result<(), ActivityRepositoryError>;

    /// Activities ascending by date, ties broken by `created_at`.
    async fn list_by_date(&self) -> Result<Vec<Activity>, ActivityRepositoryError>;

    /// Merge `patch` and stamp `updated_at`; `None` when the id is unknown.
    async fn apply_patch(
        &self,
        id: ActivityId,
        patch: ActivityPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Activity>, ActivityRepositoryError>;

    /// Remove the activity, reporting whether a row existed.
    async fn delete(&self, id: ActivityId) -> Result<bool, ActivityRepositoryError>;
}
