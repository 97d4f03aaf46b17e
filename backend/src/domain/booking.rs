//! Retreat bookings and the date-range rules that guard them.
//!
//! A booking occupies a closed interval of calendar days. Only approved
//! bookings reserve their interval; pending and rejected ones never block a
//! new request.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::record_id::define_record_id;

define_record_id!(
    /// Booking identifier.
    BookingId
);

/// Review state of a booking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Awaiting review. Every booking starts here.
    #[default]
    Pending,
    /// Accepted; the interval is now reserved.
    Approved,
    /// Declined.
    Rejected,
}

impl BookingStatus {
    /// Storage and wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a status string is not one of the three states.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown booking status '{0}'")]
pub struct UnknownBookingStatus(pub String);

impl FromStr for BookingStatus {
    type Err = UnknownBookingStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(UnknownBookingStatus(other.to_owned())),
        }
    }
}

/// Raised when a stay would end before it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("stay ends on {end} before it starts on {start}")]
pub struct EndBeforeStart {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Closed interval of calendar days, `start <= end`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use temple_backend::domain::StayPeriod;
///
/// let day = |d| NaiveDate::from_ymd_opt(2025, 6, d).unwrap();
/// let approved = StayPeriod::new(day(1), day(5)).unwrap();
/// assert!(approved.overlaps(&StayPeriod::new(day(5), day(10)).unwrap()));
/// assert!(!approved.overlaps(&StayPeriod::new(day(6), day(10)).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StayPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl StayPeriod {
    /// Build a period; a single-day stay (`start == end`) is allowed.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, EndBeforeStart> {
        if end < start {
            return Err(EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Closed-interval intersection test.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}

/// Stored booking as returned to administrators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[schema(minimum = 1)]
    pub number_of_people: u32,
    pub purpose: String,
    pub status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// The reserved interval.
    ///
    /// Stored rows always satisfy `start_date <= end_date`; a corrupt row
    /// degrades to a single-day period at `start_date`.
    #[must_use]
    pub fn period(&self) -> StayPeriod {
        StayPeriod::new(self.start_date, self.end_date).unwrap_or(StayPeriod {
            start: self.start_date,
            end: self.start_date,
        })
    }

    /// Whether this booking blocks `requested`.
    #[must_use]
    pub fn blocks(&self, requested: &StayPeriod) -> bool {
        self.status == BookingStatus::Approved && self.period().overlaps(requested)
    }
}

/// Raw booking request as submitted by a visitor.
///
/// Every field is optional so the service can name the first missing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingSubmission {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub number_of_people: Option<i64>,
    pub purpose: Option<String>,
    pub notes: Option<String>,
}

/// Validated booking ready for the conditional insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub id: BookingId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub period: StayPeriod,
    pub number_of_people: u32,
    pub purpose: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewBooking {
    /// The pending record this insert produces.
    #[must_use]
    pub fn into_booking(self) -> Booking {
        Booking {
            id: self.id,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            start_date: self.period.start(),
            end_date: self.period.end(),
            number_of_people: self.number_of_people,
            purpose: self.purpose,
            status: BookingStatus::Pending,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}
