//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer. Row-to-domain conversions
//! return `String` errors so each repository can wrap them in its own port
//! error.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    Activity, ActivityId, ActivityPatch, ActivityStatus, Booking, BookingId, BookingStatus,
    Email, GalleryCategory, GalleryItem, GalleryItemId, NewBooking, PasswordHash, User, UserDraft,
    UserId, UserRole, Username,
};

use super::schema::{activities, bookings, gallery_items, users};

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = String;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self::new(UserDraft {
            id: UserId::from_uuid(row.id),
            username: Username::try_from(row.username).map_err(|err| err.to_string())?,
            email: Email::try_from(row.email).map_err(|err| err.to_string())?,
            password_hash: PasswordHash::from_encoded(row.password_hash),
            role: row.role.parse::<UserRole>().map_err(|err| err.to_string())?,
            created_at: row.created_at,
        }))
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub role: &'a str,
    pub created_at: DateTime<Utc>,
}

impl<'a> From<&'a User> for NewUserRow<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            id: *user.id().as_uuid(),
            username: user.username().as_str(),
            email: user.email().as_str(),
            password_hash: user.password_hash().as_encoded(),
            role: user.role().as_str(),
            created_at: user.created_at(),
        }
    }
}

// ---------------------------------------------------------------------------
// Bookings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = bookings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BookingRow {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub number_of_people: i32,
    pub purpose: String,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = String;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: BookingId::from_uuid(row.id),
            full_name: row.full_name,
            email: row.email,
            phone: row.phone,
            start_date: row.start_date,
            end_date: row.end_date,
            number_of_people: u32::try_from(row.number_of_people)
                .map_err(|_| format!("negative party size {}", row.number_of_people))?,
            purpose: row.purpose,
            status: row
                .status
                .parse::<BookingStatus>()
                .map_err(|err| err.to_string())?,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bookings)]
pub(crate) struct NewBookingRow<'a> {
    pub id: Uuid,
    pub full_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub number_of_people: i32,
    pub purpose: &'a str,
    pub status: &'a str,
    pub notes: Option<&'a str>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> TryFrom<&'a NewBooking> for NewBookingRow<'a> {
    type Error = String;

    fn try_from(booking: &'a NewBooking) -> Result<Self, Self::Error> {
        Ok(Self {
            id: *booking.id.as_uuid(),
            full_name: &booking.full_name,
            email: &booking.email,
            phone: &booking.phone,
            start_date: booking.period.start(),
            end_date: booking.period.end(),
            number_of_people: i32::try_from(booking.number_of_people)
                .map_err(|_| format!("party size {} out of range", booking.number_of_people))?,
            purpose: &booking.purpose,
            status: BookingStatus::Pending.as_str(),
            notes: booking.notes.as_deref(),
            created_at: booking.created_at,
            updated_at: booking.created_at,
        })
    }
}

// ---------------------------------------------------------------------------
// Activities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = activities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ActivityRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub image_url: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ActivityRow> for Activity {
    type Error = String;

    fn try_from(row: ActivityRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ActivityId::from_uuid(row.id),
            title: row.title,
            description: row.description,
            date: row.date,
            time: row.time,
            location: row.location,
            image_url: row.image_url,
            status: row
                .status
                .parse::<ActivityStatus>()
                .map_err(|err| err.to_string())?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = activities)]
pub(crate) struct NewActivityRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub description: &'a str,
    pub date: NaiveDate,
    pub time: &'a str,
    pub location: &'a str,
    pub image_url: &'a str,
    pub status: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Activity> for NewActivityRow<'a> {
    fn from(activity: &'a Activity) -> Self {
        Self {
            id: *activity.id.as_uuid(),
            title: &activity.title,
            description: &activity.description,
            date: activity.date,
            time: &activity.time,
            location: &activity.location,
            image_url: &activity.image_url,
            status: activity.status.as_str(),
            created_at: activity.created_at,
            updated_at: activity.updated_at,
        }
    }
}

/// Partial update; `None` columns are left untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = activities)]
pub(crate) struct ActivityChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub status: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl ActivityChanges {
    pub(crate) fn new(patch: ActivityPatch, updated_at: DateTime<Utc>) -> Self {
        Self {
            title: patch.title,
            description: patch.description,
            date: patch.date,
            time: patch.time,
            location: patch.location,
            image_url: patch.image_url,
            status: patch.status.map(|status| status.as_str().to_owned()),
            updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = gallery_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct GalleryItemRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<GalleryItemRow> for GalleryItem {
    type Error = String;

    fn try_from(row: GalleryItemRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: GalleryItemId::from_uuid(row.id),
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            category: row
                .category
                .parse::<GalleryCategory>()
                .map_err(|err| err.to_string())?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = gallery_items)]
pub(crate) struct NewGalleryItemRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub description: &'a str,
    pub image_url: &'a str,
    pub category: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a GalleryItem> for NewGalleryItemRow<'a> {
    fn from(item: &'a GalleryItem) -> Self {
        Self {
            id: *item.id.as_uuid(),
            title: &item.title,
            description: &item.description,
            image_url: &item.image_url,
            category: item.category.as_str(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0)
            .single()
            .expect("timestamp")
    }

    fn booking_row(status: &str, people: i32) -> BookingRow {
        BookingRow {
            id: Uuid::new_v4(),
            full_name: "สมชาย ใจดี".to_owned(),
            email: "somchai@example.com".to_owned(),
            phone: "0812345678".to_owned(),
            start_date: NaiveDate::from_ymd_opt(2025, 7, 1).expect("date"),
            end_date: NaiveDate::from_ymd_opt(2025, 7, 3).expect("date"),
            number_of_people: people,
            purpose: "ปฏิบัติธรรม".to_owned(),
            status: status.to_owned(),
            notes: None,
            created_at: at(),
            updated_at: at(),
        }
    }

    #[rstest]
    fn user_rows_become_validated_users() {
        let row = UserRow {
            id: Uuid::new_v4(),
            username: "abbot".to_owned(),
            email: "abbot@example.com".to_owned(),
            password_hash: "$2b$10$hash".to_owned(),
            role: "admin".to_owned(),
            created_at: at(),
        };

        let user = User::try_from(row).expect("valid row");

        assert_eq!(user.username().as_str(), "abbot");
        assert_eq!(user.role(), UserRole::Admin);
    }

    #[rstest]
    fn unknown_user_roles_are_rejected() {
        let row = UserRow {
            id: Uuid::new_v4(),
            username: "abbot".to_owned(),
            email: "abbot@example.com".to_owned(),
            password_hash: "$2b$10$hash".to_owned(),
            role: "superuser".to_owned(),
            created_at: at(),
        };

        assert!(User::try_from(row).is_err());
    }

    #[rstest]
    #[case("approved", 4, true)]
    #[case("cancelled", 4, false)]
    #[case("pending", -1, false)]
    fn booking_rows_convert_only_when_well_formed(
        #[case] status: &str,
        #[case] people: i32,
        #[case] ok: bool,
    ) {
        let converted = Booking::try_from(booking_row(status, people));
        assert_eq!(converted.is_ok(), ok);
        if let Ok(booking) = converted {
            assert_eq!(booking.status, BookingStatus::Approved);
            assert_eq!(booking.number_of_people, 4);
        }
    }

    #[rstest]
    fn activity_changes_skip_absent_fields() {
        let patch = ActivityPatch {
            status: Some(ActivityStatus::Completed),
            ..ActivityPatch::default()
        };

        let changes = ActivityChanges::new(patch, at());

        assert_eq!(changes.status.as_deref(), Some("completed"));
        assert!(changes.title.is_none());
        assert_eq!(changes.updated_at, at());
    }

    #[rstest]
    fn gallery_rows_parse_their_category() {
        let row = GalleryItemRow {
            id: Uuid::new_v4(),
            title: "ศาลา".to_owned(),
            description: "ศาลาการเปรียญ".to_owned(),
            image_url: "https://example.com/sala.jpg".to_owned(),
            category: "landscape".to_owned(),
            created_at: at(),
            updated_at: at(),
        };

        let item = GalleryItem::try_from(row).expect("valid row");

        assert_eq!(item.category, GalleryCategory::Landscape);
    }
}
