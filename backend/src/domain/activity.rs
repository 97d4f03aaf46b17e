//! Temple activities published on the public calendar.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::record_id::define_record_id;

define_record_id!(
    /// Activity identifier.
    ActivityId
);

/// Progress of an activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
}

impl ActivityStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown activity status '{0}'")]
pub struct UnknownActivityStatus(pub String);

impl FromStr for ActivityStatus {
    type Err = UnknownActivityStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "upcoming" => Ok(Self::Upcoming),
            "ongoing" => Ok(Self::Ongoing),
            "completed" => Ok(Self::Completed),
            other => Err(UnknownActivityStatus(other.to_owned())),
        }
    }
}

/// Stored activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Free-form time of day as entered by staff, e.g. `09:00 - 12:00`.
    pub time: String,
    pub location: String,
    pub image_url: String,
    pub status: ActivityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Activity {
    /// Merge `patch` into this activity, stamping `updated_at`.
    #[must_use]
    pub fn patched(self, patch: ActivityPatch, now: DateTime<Utc>) -> Self {
        let ActivityPatch {
            title,
            description,
            date,
            time,
            location,
            image_url,
            status,
        } = patch;
        Self {
            title: title.unwrap_or(self.title),
            description: description.unwrap_or(self.description),
            date: date.unwrap_or(self.date),
            time: time.unwrap_or(self.time),
            location: location.unwrap_or(self.location),
            image_url: image_url.unwrap_or(self.image_url),
            status: status.unwrap_or(self.status),
            updated_at: now,
            ..self
        }
    }
}

/// Raw create/patch payload; absent fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivitySubmission {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub status: Option<String>,
}

/// Validated partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub status: Option<ActivityStatus>,
}
